//! Salary net-pay computation: statutory deductions, taxable income, and the
//! monthly take-home split.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::tax::income::{calculate_income_tax, slab_breakdown, SlabLine};

/// Province of employment. Social security is 6% in Sindh and Punjab, 5%
/// elsewhere; the flat professional tax applies in Sindh only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Province {
    Sindh,
    Punjab,
    Kpk,
    Balochistan,
    Islamabad,
}

#[derive(Debug, Clone)]
pub struct SalaryInput {
    pub monthly_salary: Decimal,
    pub annual_bonus: Decimal,
    /// EOBI contribution: 1% of salary capped at Rs. 200
    pub include_eobi: bool,
    pub include_social_security: bool,
    /// Provident fund contribution as a percentage of monthly salary
    pub provident_fund_percent: Decimal,
    pub province: Province,
}

/// Monthly deduction amounts, zero for disabled options.
#[derive(Debug, Clone, Serialize)]
pub struct Deductions {
    pub eobi: Decimal,
    pub social_security: Decimal,
    pub provident_fund: Decimal,
    pub professional_tax: Decimal,
}

impl Deductions {
    pub fn total(&self) -> Decimal {
        self.eobi + self.social_security + self.provident_fund + self.professional_tax
    }
}

/// Monthly salary split for the summary chart: income tax, other deductions,
/// and take-home pay.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySplit {
    pub tax: Decimal,
    pub other_deductions: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryResult {
    pub gross_annual: Decimal,
    pub deductions: Deductions,
    pub taxable_income: Decimal,
    pub annual_tax: Decimal,
    pub monthly_tax: Decimal,
    pub net_monthly: Decimal,
    /// Annual tax as a percentage of gross annual salary, two decimal places
    pub effective_rate: Decimal,
    pub breakdown: Vec<SlabLine>,
    pub split: MonthlySplit,
}

/// Monthly statutory deductions for a salary under the given options.
pub fn calculate_deductions(input: &SalaryInput) -> Deductions {
    let salary = input.monthly_salary;

    let eobi = if input.include_eobi {
        (salary * dec!(0.01)).min(dec!(200))
    } else {
        Decimal::ZERO
    };

    let social_security = if input.include_social_security {
        let rate = match input.province {
            Province::Sindh | Province::Punjab => dec!(0.06),
            _ => dec!(0.05),
        };
        salary * rate
    } else {
        Decimal::ZERO
    };

    let provident_fund = salary * input.provident_fund_percent / dec!(100);

    let professional_tax = if input.province == Province::Sindh && salary > dec!(12000) {
        dec!(200)
    } else {
        Decimal::ZERO
    };

    Deductions {
        eobi,
        social_security,
        provident_fund,
        professional_tax,
    }
}

/// Full salary computation: gross, deductions, tax, net pay and breakdown.
pub fn calculate_salary(input: &SalaryInput) -> SalaryResult {
    let gross_annual = input.monthly_salary * dec!(12) + input.annual_bonus;

    let deductions = calculate_deductions(input);
    let monthly_deductions = deductions.total();
    let taxable_income = gross_annual - monthly_deductions * dec!(12);

    let annual_tax = calculate_income_tax(taxable_income);
    let monthly_tax = annual_tax / dec!(12);
    let net_monthly = input.monthly_salary - monthly_tax - monthly_deductions;

    let effective_rate = if gross_annual > Decimal::ZERO {
        (annual_tax / gross_annual * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    log::debug!(
        "salary: gross={}, deductions={}/mo, taxable={}, tax={}",
        gross_annual,
        monthly_deductions,
        taxable_income,
        annual_tax
    );

    SalaryResult {
        gross_annual,
        taxable_income,
        annual_tax,
        monthly_tax,
        net_monthly,
        effective_rate,
        breakdown: slab_breakdown(taxable_income),
        split: MonthlySplit {
            tax: monthly_tax,
            other_deductions: monthly_deductions,
            net: net_monthly,
        },
        deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(monthly: Decimal) -> SalaryInput {
        SalaryInput {
            monthly_salary: monthly,
            annual_bonus: Decimal::ZERO,
            include_eobi: false,
            include_social_security: false,
            provident_fund_percent: Decimal::ZERO,
            province: Province::Punjab,
        }
    }

    #[test]
    fn salary_without_deductions() {
        let result = calculate_salary(&input(dec!(100000)));

        assert_eq!(result.gross_annual, dec!(1200000));
        assert_eq!(result.taxable_income, dec!(1200000));
        assert_eq!(result.annual_tax, dec!(6000));
        assert_eq!(result.monthly_tax, dec!(500));
        assert_eq!(result.net_monthly, dec!(99500));
        assert_eq!(result.effective_rate, dec!(0.50));
    }

    #[test]
    fn eobi_capped_at_200() {
        let mut inp = input(dec!(100000));
        inp.include_eobi = true;
        let deductions = calculate_deductions(&inp);
        assert_eq!(deductions.eobi, dec!(200));

        inp.monthly_salary = dec!(15000);
        let deductions = calculate_deductions(&inp);
        assert_eq!(deductions.eobi, dec!(150));
    }

    #[test]
    fn social_security_rate_by_province() {
        let mut inp = input(dec!(50000));
        inp.include_social_security = true;
        assert_eq!(calculate_deductions(&inp).social_security, dec!(3000));

        inp.province = Province::Kpk;
        assert_eq!(calculate_deductions(&inp).social_security, dec!(2500));
    }

    #[test]
    fn professional_tax_sindh_only_above_threshold() {
        let mut inp = input(dec!(50000));
        inp.province = Province::Sindh;
        assert_eq!(calculate_deductions(&inp).professional_tax, dec!(200));

        inp.monthly_salary = dec!(12000);
        assert_eq!(calculate_deductions(&inp).professional_tax, Decimal::ZERO);

        inp.monthly_salary = dec!(50000);
        inp.province = Province::Islamabad;
        assert_eq!(calculate_deductions(&inp).professional_tax, Decimal::ZERO);
    }

    #[test]
    fn deductions_reduce_taxable_income() {
        let mut inp = input(dec!(100000));
        inp.provident_fund_percent = dec!(10);
        let result = calculate_salary(&inp);

        assert_eq!(result.deductions.provident_fund, dec!(10000));
        assert_eq!(result.taxable_income, dec!(1080000));
        // 1% of the amount above 600,000
        assert_eq!(result.annual_tax, dec!(4800));
    }

    #[test]
    fn bonus_counts_toward_gross() {
        let mut inp = input(dec!(100000));
        inp.annual_bonus = dec!(300000);
        let result = calculate_salary(&inp);
        assert_eq!(result.gross_annual, dec!(1500000));
        assert_eq!(result.annual_tax, dec!(39000));
    }

    #[test]
    fn zero_salary_yields_zero_effective_rate() {
        let result = calculate_salary(&input(Decimal::ZERO));
        assert_eq!(result.effective_rate, Decimal::ZERO);
        assert_eq!(result.net_monthly, Decimal::ZERO);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn split_accounts_for_whole_salary() {
        let mut inp = input(dec!(100000));
        inp.include_eobi = true;
        let result = calculate_salary(&inp);
        let split = &result.split;
        assert_eq!(
            split.tax + split.other_deductions + split.net,
            inp.monthly_salary
        );
    }
}
