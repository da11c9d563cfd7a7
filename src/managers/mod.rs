// TabShell state managers

pub mod session_state;
pub mod tab_collection;
