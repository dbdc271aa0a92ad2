mod batch_schedule;

pub use batch_schedule::Schedule;
