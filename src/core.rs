pub mod cycle;
pub mod day_boundary;
pub mod reconciler;
pub mod report;
pub mod retention;
pub mod sample;
