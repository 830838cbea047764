pub mod agri;
pub mod business;
pub mod duty;
pub mod income;
pub mod pension;
pub mod property;
pub mod salary;
pub mod sales;
pub mod zakat;

pub use agri::{calculate_agri_tax, AgriAssessment, AgriResult, LandType};
pub use business::{calculate_business_tax, BusinessResult, EntityType};
pub use duty::{calculate_duty, Channel, DutyResult, DEFAULT_USD_RATE};
pub use income::{calculate_income_tax, slab_breakdown, SlabLine};
pub use pension::{calculate_pension, PensionResult, PensionType};
pub use property::{calculate_property_tax, City, PropertyResult, PropertyType};
pub use salary::{calculate_salary, Province, SalaryInput, SalaryResult};
pub use sales::{calculate_sales_tax, SalesResult};
pub use zakat::{calculate_zakat, WealthInput, ZakatResult, ZakatStatus, NISAB};
