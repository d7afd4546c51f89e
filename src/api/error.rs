// ==========================================
// 船坞泵排预订系统 - API层错误类型
// ==========================================
// 职责: 定义调用方契约违反的错误类型
// 注意: 策略拒绝 (过季/周冲突/超窗) 不是错误,
//       以结构化结果表达,见 domain::plan
// ==========================================

use thiserror::Error;

/// API层错误类型
///
/// 仅在调用方违反契约 (未知计划、超上限追加) 或配置加载失败时产生
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("unknown plan code: {0}")]
    UnknownPlan(String),

    #[error("purchase window closed: {message}")]
    PurchaseWindowClosed { message: String },

    #[error("additional count {requested} exceeds cap {cap} for plan {plan_code}")]
    AdditionalOverCap {
        plan_code: String,
        requested: u32,
        cap: u32,
    },

    #[error("plan catalog error: {0}")]
    CatalogError(String),
}
