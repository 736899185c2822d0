pub mod booking_service;
pub mod chat_controller;
pub mod dashboard_service;
pub mod reception_service;
