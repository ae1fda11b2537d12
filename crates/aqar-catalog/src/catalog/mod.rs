//! Listing catalog: typed records, criteria, and the filtering service used by
//! the storefront listings and the dashboard tables.

pub mod criteria;
pub mod domain;
pub mod filter;
pub mod import;
pub mod investment;
pub mod query;
pub mod router;
pub mod service;
pub mod store;
pub mod summary;

#[cfg(test)]
mod tests;

pub use criteria::{
    BlogCriteria, CityCriteria, CriteriaError, CustomerCriteria, DistrictCriteria, FaqCriteria,
    FinancingCriteria, LeadCriteria, ProjectCriteria, PropertyCriteria, UnitCriteria,
    UserCriteria,
};
pub use domain::{
    AppRole, BlogPost, City, Customer, District, Faq, FinancingRequest, FinancingStatus,
    FinancingType, Lead, LeadPriority, LeadStatus, ListingStatus, Project, ProjectStatus,
    Property, PropertyCategory, Unit, UnitStatus, UserAccount,
};
pub use filter::{filter, filter_cloned, matches, Exact, Matches, Range, TextSearch};
pub use import::{PropertyImportError, PropertyImporter};
pub use investment::{InvestmentError, InvestmentInput, InvestmentProjection};
pub use router::catalog_router;
pub use service::{CatalogService, CatalogServiceError, Listing};
pub use store::{CatalogSnapshot, CatalogStore, RepositoryError};
pub use summary::{paginate, tally, Page, PageRequest, StatusTally};
