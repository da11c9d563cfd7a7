// TabShell service implementations

pub mod persistence;
pub mod router;
pub mod search;
pub mod viewport;
