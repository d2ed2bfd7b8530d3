//! In-process fan-out of collection change events.
//!
//! Services publish a [`CollectionChangeEvent`](crate::server::model::event::CollectionChangeEvent)
//! on the [`bus::EventBus`] after every successful write. Subscribers such as
//! [`realtime::RealtimeSync`] run on their own tasks, so publishing never waits
//! on them and a failing subscriber never fails the request.

pub mod bus;
pub mod realtime;
