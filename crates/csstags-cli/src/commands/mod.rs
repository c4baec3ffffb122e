pub mod dispatch;
pub mod kinds;
pub mod scan;
pub mod schema;
