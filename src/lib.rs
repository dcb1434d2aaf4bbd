pub mod model;
pub mod ops;
pub mod paths;
pub mod remote;
pub mod resolve;
pub mod screenshots;
pub mod store;
