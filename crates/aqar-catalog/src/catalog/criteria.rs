//! One criteria type per listing domain.
//!
//! Field names mirror the filter controls on the storefront and dashboard
//! screens. Every field defaults to its unconstrained variant.

use serde::Serialize;

use super::domain::{
    AppRole, BlogPost, City, Customer, District, Faq, FinancingRequest, FinancingStatus,
    FinancingType, Lead, LeadPriority, LeadStatus, ListingStatus, Project, ProjectStatus,
    Property, PropertyCategory, Unit, UnitStatus, UserAccount,
};
use super::filter::{Exact, Matches, Range, TextSearch};

/// Raised while turning raw filter input into typed criteria.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },
    #[error("invalid room bucket '{value}', expected a count such as 3 or 5+")]
    InvalidBucket { value: String },
    #[error("invalid flag '{value}', expected true or false")]
    InvalidFlag { value: String },
    #[error("{field} '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyCriteria {
    pub city: Exact<String>,
    pub category: Exact<PropertyCategory>,
    pub status: Exact<ListingStatus>,
    pub featured: Exact<bool>,
    pub price: Range<u64>,
    pub area: Range<f64>,
    pub bedrooms: Range<u32>,
    /// Matches title, address, city, or district.
    pub search: TextSearch,
}

impl Matches<Property> for PropertyCriteria {
    fn matches(&self, record: &Property) -> bool {
        self.city.test(record.city.as_deref())
            && self.category.test(record.category.as_ref())
            && self.status.test(record.status.as_ref())
            && self.featured.test(Some(&record.is_featured))
            && self.price.test(Some(record.price))
            && self.area.test(Some(record.area))
            && self.bedrooms.test(record.bedrooms)
            && self.search.test([
                Some(record.title.as_str()),
                record.address.as_deref(),
                record.city.as_deref(),
                record.district.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.city.is_any()
            && self.category.is_any()
            && self.status.is_any()
            && self.featured.is_any()
            && self.price.is_unbounded()
            && self.area.is_unbounded()
            && self.bedrooms.is_unbounded()
            && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectCriteria {
    pub city: Exact<String>,
    pub status: Exact<ProjectStatus>,
    pub project_type: Exact<String>,
    pub investment: Exact<bool>,
    pub featured: Exact<bool>,
    /// Applied to the advertised starting price.
    pub price: Range<u64>,
    /// Matches name, city, district, or developer.
    pub search: TextSearch,
}

impl Matches<Project> for ProjectCriteria {
    fn matches(&self, record: &Project) -> bool {
        self.city.test(record.city.as_deref())
            && self.status.test(record.status.as_ref())
            && self.project_type.test(record.project_type.as_deref())
            && self.investment.test(Some(&record.is_investment))
            && self.featured.test(Some(&record.is_featured))
            && self.price.test(record.price_from)
            && self.search.test([
                Some(record.name.as_str()),
                record.city.as_deref(),
                record.district.as_deref(),
                record.developer.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.city.is_any()
            && self.status.is_any()
            && self.project_type.is_any()
            && self.investment.is_any()
            && self.featured.is_any()
            && self.price.is_unbounded()
            && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitCriteria {
    pub project_id: Exact<String>,
    pub unit_type: Exact<String>,
    pub status: Exact<UnitStatus>,
    pub sale_type: Exact<ListingStatus>,
    pub price: Range<u64>,
    pub area: Range<f64>,
    pub bedrooms: Range<u32>,
    /// Matches unit number or project name.
    pub search: TextSearch,
}

impl Matches<Unit> for UnitCriteria {
    fn matches(&self, record: &Unit) -> bool {
        self.project_id.test(Some(record.project_id.as_str()))
            && self.unit_type.test(record.unit_type.as_deref())
            && self.status.test(record.status.as_ref())
            && self.sale_type.test(record.sale_type.as_ref())
            && self.price.test(Some(record.price))
            && self.area.test(Some(record.area))
            && self.bedrooms.test(record.bedrooms)
            && self.search.test([
                Some(record.unit_number.as_str()),
                record.project_name.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.project_id.is_any()
            && self.unit_type.is_any()
            && self.status.is_any()
            && self.sale_type.is_any()
            && self.price.is_unbounded()
            && self.area.is_unbounded()
            && self.bedrooms.is_unbounded()
            && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerCriteria {
    pub customer_type: Exact<String>,
    pub source: Exact<String>,
    pub active: Exact<bool>,
    /// Matches full name, phone, or email.
    pub search: TextSearch,
}

impl Matches<Customer> for CustomerCriteria {
    fn matches(&self, record: &Customer) -> bool {
        self.customer_type.test(record.customer_type.as_deref())
            && self.source.test(record.source.as_deref())
            && self.active.test(Some(&record.is_active))
            && self.search.test([
                Some(record.full_name.as_str()),
                record.phone.as_deref(),
                record.email.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.customer_type.is_any()
            && self.source.is_any()
            && self.active.is_any()
            && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadCriteria {
    pub status: Exact<LeadStatus>,
    pub priority: Exact<LeadPriority>,
    /// Matches customer or project name.
    pub search: TextSearch,
}

impl Matches<Lead> for LeadCriteria {
    fn matches(&self, record: &Lead) -> bool {
        self.status.test(record.status.as_ref())
            && self.priority.test(record.priority.as_ref())
            && self.search.test([
                record.customer_name.as_deref(),
                record.project_name.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.status.is_any() && self.priority.is_any() && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinancingCriteria {
    pub status: Exact<FinancingStatus>,
    pub request_type: Exact<FinancingType>,
    pub monthly_income: Range<u64>,
    /// Matches customer name or phone.
    pub search: TextSearch,
}

impl Matches<FinancingRequest> for FinancingCriteria {
    fn matches(&self, record: &FinancingRequest) -> bool {
        self.status.test(record.status.as_ref())
            && self.request_type.test(Some(&record.request_type))
            && self.monthly_income.test(record.monthly_income)
            && self.search.test([
                record.customer_name.as_deref(),
                record.customer_phone.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.status.is_any()
            && self.request_type.is_any()
            && self.monthly_income.is_unbounded()
            && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FaqCriteria {
    pub category: Exact<String>,
    /// Matches question or answer.
    pub search: TextSearch,
}

impl Matches<Faq> for FaqCriteria {
    fn matches(&self, record: &Faq) -> bool {
        self.category.test(record.category.as_deref())
            && self.search.test([Some(record.question.as_str()), Some(record.answer.as_str())])
    }

    fn is_unconstrained(&self) -> bool {
        self.category.is_any() && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlogCriteria {
    pub category: Exact<String>,
    pub featured: Exact<bool>,
    /// Matches title, excerpt, or category.
    pub search: TextSearch,
}

impl Matches<BlogPost> for BlogCriteria {
    fn matches(&self, record: &BlogPost) -> bool {
        self.category.test(record.category.as_deref())
            && self.featured.test(Some(&record.featured))
            && self.search.test([
                Some(record.title.as_str()),
                Some(record.excerpt.as_str()),
                record.category.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.category.is_any() && self.featured.is_any() && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CityCriteria {
    pub active: Exact<bool>,
    /// Matches the Arabic or English name.
    pub search: TextSearch,
}

impl Matches<City> for CityCriteria {
    fn matches(&self, record: &City) -> bool {
        self.active.test(Some(&record.is_active))
            && self.search.test([Some(record.name.as_str()), record.name_en.as_deref()])
    }

    fn is_unconstrained(&self) -> bool {
        self.active.is_any() && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DistrictCriteria {
    pub city_id: Exact<String>,
    pub active: Exact<bool>,
    /// Matches the district's names or its city's name.
    pub search: TextSearch,
}

impl Matches<District> for DistrictCriteria {
    fn matches(&self, record: &District) -> bool {
        self.city_id.test(Some(record.city_id.as_str()))
            && self.active.test(Some(&record.is_active))
            && self.search.test([
                Some(record.name.as_str()),
                record.name_en.as_deref(),
                record.city_name.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.city_id.is_any() && self.active.is_any() && self.search.is_any()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserCriteria {
    pub role: Exact<AppRole>,
    /// Matches email, full name, or phone.
    pub search: TextSearch,
}

impl Matches<UserAccount> for UserCriteria {
    fn matches(&self, record: &UserAccount) -> bool {
        self.role.test(record.role.as_ref())
            && self.search.test([
                record.email.as_deref(),
                record.full_name.as_deref(),
                record.phone.as_deref(),
            ])
    }

    fn is_unconstrained(&self) -> bool {
        self.role.is_any() && self.search.is_any()
    }
}
