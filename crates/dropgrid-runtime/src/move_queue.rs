use std::collections::VecDeque;

use dropgrid_engine::Move;

/// FIFO of moves waiting to be applied, one per tick.
///
/// # Example
///
/// ```
/// use dropgrid_engine::Move;
/// use dropgrid_runtime::MoveQueue;
///
/// let mut moves = MoveQueue::new();
/// moves.push(Move::Left);
/// moves.push(Move::Rotate);
///
/// assert_eq!(moves.pop(), Some(Move::Left));
/// assert_eq!(moves.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MoveQueue {
    moves: VecDeque<Move>,
}

impl MoveQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, next_move: Move) {
        self.moves.push_back(next_move);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl Extend<Move> for MoveQueue {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut moves = MoveQueue::new();
        moves.extend([Move::Down, Move::Left, Move::Down]);
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.pop(), Some(Move::Down));
        assert_eq!(moves.pop(), Some(Move::Left));
        assert_eq!(moves.pop(), Some(Move::Down));
        assert_eq!(moves.pop(), None);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut moves = MoveQueue::new();
        moves.extend([Move::Rotate, Move::Right]);
        moves.clear();
        assert!(moves.is_empty());
        assert_eq!(moves.pop(), None);
    }

    #[test]
    fn test_push_after_drain() {
        let mut moves = MoveQueue::new();
        moves.push(Move::Rotate);
        assert_eq!(moves.pop(), Some(Move::Rotate));
        assert_eq!(moves.pop(), None);
        moves.push(Move::Right);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves.pop(), Some(Move::Right));
    }
}
