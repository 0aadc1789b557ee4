//! Order placement and history

mod service;


pub use service::OrderService;
