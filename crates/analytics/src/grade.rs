//! Letter grading of a month's performance.
//!
//! The score is additive over three components: the month's aggregate P&L%
//! (up to 40 points), profit factor (up to 30) and expectancy % (up to 30).
//! A month that lost money in currency terms is marked down one letter.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    fn from_score(score: u32) -> Self {
        match score {
            85.. => Grade::A,
            65..=84 => Grade::B,
            50..=64 => Grade::C,
            35..=49 => Grade::D,
            _ => Grade::F,
        }
    }

    /// One letter worse. F stays F.
    pub fn downgrade(self) -> Self {
        match self {
            Grade::A => Grade::B,
            Grade::B => Grade::C,
            Grade::C => Grade::D,
            Grade::D | Grade::F => self,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCard {
    pub score: u32,
    pub grade: Grade,
}

/// Grades a month.
///
/// `total_pnl` is in currency; only its sign matters.
pub fn grade_month(
    monthly_pnl_percent: Decimal,
    profit_factor: Decimal,
    expectancy_percent: Decimal,
    total_pnl: Decimal,
) -> GradeCard {
    let score = pnl_points(monthly_pnl_percent)
        + profit_factor_points(profit_factor)
        + expectancy_points(expectancy_percent);

    let mut grade = Grade::from_score(score);
    if total_pnl < Decimal::ZERO {
        grade = grade.downgrade();
    }

    GradeCard { score, grade }
}

fn pnl_points(pnl_percent: Decimal) -> u32 {
    if pnl_percent >= dec!(300) {
        40
    } else if pnl_percent >= dec!(200) {
        35
    } else if pnl_percent >= dec!(150) {
        30
    } else if pnl_percent >= dec!(100) {
        25
    } else if pnl_percent >= dec!(50) {
        15
    } else if pnl_percent >= Decimal::ZERO {
        8
    } else {
        0
    }
}

fn profit_factor_points(profit_factor: Decimal) -> u32 {
    if profit_factor >= dec!(2.5) {
        30
    } else if profit_factor >= dec!(2) {
        26
    } else if profit_factor >= dec!(1.5) {
        22
    } else if profit_factor >= dec!(1.2) {
        16
    } else if profit_factor >= dec!(1) {
        10
    } else if profit_factor >= dec!(0.8) {
        5
    } else {
        0
    }
}

fn expectancy_points(expectancy_percent: Decimal) -> u32 {
    if expectancy_percent >= dec!(12) {
        30
    } else if expectancy_percent >= dec!(8) {
        24
    } else if expectancy_percent >= dec!(5) {
        18
    } else if expectancy_percent >= dec!(3) {
        14
    } else if expectancy_percent >= Decimal::ZERO {
        8
    } else if expectancy_percent > dec!(-5) {
        4
    } else {
        0
    }
}
