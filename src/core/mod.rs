pub mod activity;
pub mod collection;
pub mod controller;
pub mod draft;
pub mod expansion;
pub mod session;
pub mod stats;
pub mod users;
