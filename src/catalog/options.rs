//! Closed option enumerations offered by every drink shop.
//!
//! Each variant persists as its display string so stored records stay readable
//! when new variants are appended. The ASCII key exists only for typed input.
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cup size. Records written before sizes existed read back as large cups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Size {
    #[default]
    #[serde(rename = "大杯 (L)")]
    #[value(name = "large", alias = "l")]
    Large,
    #[serde(rename = "中杯 (M)")]
    #[value(name = "medium", alias = "m")]
    Medium,
    #[serde(rename = "瓶裝 (Bottle)")]
    #[value(name = "bottle")]
    Bottle,
}

/// Sweetness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum SugarLevel {
    #[serde(rename = "全糖 (100%)")]
    #[value(name = "regular")]
    Regular,
    #[serde(rename = "少糖 (70%)")]
    #[value(name = "less")]
    Less,
    #[serde(rename = "半糖 (50%)")]
    #[value(name = "half")]
    Half,
    #[serde(rename = "微糖 (30%)")]
    #[value(name = "quarter")]
    Quarter,
    #[serde(rename = "二分糖 (20%)")]
    #[value(name = "two-point")]
    TwoPoint,
    #[serde(rename = "一分糖 (10%)")]
    #[value(name = "one-point")]
    OnePoint,
    #[serde(rename = "無糖 (0%)")]
    #[value(name = "none")]
    None,
}

/// Ice level, including the warm and hot serving options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum IceLevel {
    #[serde(rename = "正常冰")]
    #[value(name = "regular")]
    Regular,
    #[serde(rename = "少冰")]
    #[value(name = "less")]
    Less,
    #[serde(rename = "半冰")]
    #[value(name = "half")]
    Half,
    #[serde(rename = "微冰")]
    #[value(name = "micro")]
    Micro,
    #[serde(rename = "去冰")]
    #[value(name = "none")]
    None,
    #[serde(rename = "完全去冰")]
    #[value(name = "total-none")]
    TotalNone,
    #[serde(rename = "溫")]
    #[value(name = "warm")]
    Warm,
    #[serde(rename = "熱")]
    #[value(name = "hot")]
    Hot,
}

/// Toppings offered by brands without their own topping list.
pub const COMMON_TOPPINGS: [&str; 13] = [
    "珍珠", "椰果", "仙草凍", "布丁", "蘆薈", "紅豆", "寒天", "芋圓", "愛玉", "燕麥", "茶凍", "粉粿", "奶蓋",
];

impl Size {
    /// Default size set, in display order.
    pub const ALL: [Size; 3] = [Size::Large, Size::Medium, Size::Bottle];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Large => "大杯 (L)",
            Size::Medium => "中杯 (M)",
            Size::Bottle => "瓶裝 (Bottle)",
        }
    }
}

impl SugarLevel {
    pub const ALL: [SugarLevel; 7] = [
        SugarLevel::Regular,
        SugarLevel::Less,
        SugarLevel::Half,
        SugarLevel::Quarter,
        SugarLevel::TwoPoint,
        SugarLevel::OnePoint,
        SugarLevel::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SugarLevel::Regular => "全糖 (100%)",
            SugarLevel::Less => "少糖 (70%)",
            SugarLevel::Half => "半糖 (50%)",
            SugarLevel::Quarter => "微糖 (30%)",
            SugarLevel::TwoPoint => "二分糖 (20%)",
            SugarLevel::OnePoint => "一分糖 (10%)",
            SugarLevel::None => "無糖 (0%)",
        }
    }
}

impl IceLevel {
    pub const ALL: [IceLevel; 8] = [
        IceLevel::Regular,
        IceLevel::Less,
        IceLevel::Half,
        IceLevel::Micro,
        IceLevel::None,
        IceLevel::TotalNone,
        IceLevel::Warm,
        IceLevel::Hot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IceLevel::Regular => "正常冰",
            IceLevel::Less => "少冰",
            IceLevel::Half => "半冰",
            IceLevel::Micro => "微冰",
            IceLevel::None => "去冰",
            IceLevel::TotalNone => "完全去冰",
            IceLevel::Warm => "溫",
            IceLevel::Hot => "熱",
        }
    }
}

/// Accept either the ASCII key (any case) or the exact display string.
fn parse_token<T: ValueEnum + Copy>(
    raw: &str,
    all: &[T],
    display: fn(T) -> &'static str,
    label: &str,
) -> Result<T> {
    let raw = raw.trim();
    if let Ok(value) = T::from_str(raw, true) {
        return Ok(value);
    }
    all.iter()
        .copied()
        .find(|value| display(*value) == raw)
        .ok_or_else(|| anyhow!("unknown {label} {raw:?}"))
}

impl FromStr for Size {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        parse_token(raw, &Size::ALL, Size::as_str, "size")
    }
}

impl FromStr for SugarLevel {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        parse_token(raw, &SugarLevel::ALL, SugarLevel::as_str, "sugar level")
    }
}

impl FromStr for IceLevel {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        parse_token(raw, &IceLevel::ALL, IceLevel::as_str, "ice level")
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SugarLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
