// ==========================================
// 船坞泵排预订系统 - API 层
// ==========================================
// 职责: 面向预订处理端的业务接口
// ==========================================

pub mod booking_api;
pub mod error;

// 重导出核心接口
pub use booking_api::{BookingApi, BookingDecision, PurchaseQuote};
pub use error::BookingError;
