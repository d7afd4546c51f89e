// ==========================================
// 船坞泵排预订系统 - 计划目录
// ==========================================
// 职责: 提供具名批量计划定义 (基础次数/价格),支持 JSON 覆写
// 红线: 引擎不自行查目录,目录由调用方注入
// ==========================================

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::plan::PlanDefinition;

// ==========================================
// PlanCatalog - 计划目录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCatalog {
    plans: HashMap<String, PlanDefinition>,
}

impl PlanCatalog {
    /// 内置默认目录
    ///
    /// 默认提供两档季票: 标准季票 10 次,轻量季票 5 次
    pub fn default_catalog() -> Self {
        let plans = vec![
            PlanDefinition {
                plan_code: "SEASON_STANDARD".to_string(),
                display_name: "Standard Season Plan".to_string(),
                base_pump_outs: 10,
                base_price_cents: 47_500,
                price_per_additional_cents: 2_500,
            },
            PlanDefinition {
                plan_code: "SEASON_LITE".to_string(),
                display_name: "Lite Season Plan".to_string(),
                base_pump_outs: 5,
                base_price_cents: 27_500,
                price_per_additional_cents: 3_000,
            },
        ];
        // 内置目录的代码保证唯一
        Self::from_definitions(plans).unwrap()
    }

    /// 从计划定义列表装配目录
    ///
    /// # 校验
    /// - 目录非空
    /// - plan_code 唯一
    pub fn from_definitions(definitions: Vec<PlanDefinition>) -> Result<Self> {
        if definitions.is_empty() {
            bail!("plan catalog must contain at least one plan definition");
        }

        let mut plans = HashMap::with_capacity(definitions.len());
        for def in definitions {
            if plans.insert(def.plan_code.clone(), def).is_some() {
                bail!("duplicate plan_code in catalog");
            }
        }

        Ok(Self { plans })
    }

    /// 从 JSON 字符串加载目录
    ///
    /// 格式: PlanDefinition 数组
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definitions: Vec<PlanDefinition> =
            serde_json::from_str(json).context("failed to parse plan catalog JSON")?;
        Self::from_definitions(definitions)
    }

    /// 从 JSON 文件加载目录
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan catalog file: {}", path.display()))?;
        let catalog = Self::from_json_str(&content)?;
        info!(path = %path.display(), plans = catalog.plans.len(), "plan catalog loaded");
        Ok(catalog)
    }

    /// 按代码查询计划定义
    pub fn get(&self, plan_code: &str) -> Option<&PlanDefinition> {
        self.plans.get(plan_code)
    }

    /// 目录内全部计划代码 (升序)
    pub fn plan_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.plans.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}
