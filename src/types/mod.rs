mod tags;
pub use tags::Tags;

mod datetime;
pub use datetime::DateTime;
