//! Drives a [`dropgrid_engine::GameState`] from a host environment.
//!
//! An [`Adapter`] supplies time, input and drawing; [`Runtime::run`] feeds
//! one timestamp and at most one queued move into the engine per frame until
//! the game ends or the adapter quits.

pub use self::{
    adapter::{Adapter, Frame, Globals},
    clock::MonotonicClock,
    frame_pacer::FramePacer,
    move_queue::MoveQueue,
    runtime::{Outcome, Runtime},
};

mod adapter;
mod clock;
mod frame_pacer;
mod move_queue;
mod runtime;
