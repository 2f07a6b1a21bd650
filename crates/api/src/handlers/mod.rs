pub mod publishing;
pub mod statistics_announcement;
