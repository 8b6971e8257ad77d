pub mod controller;
pub mod marker;
