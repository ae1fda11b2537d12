use serde::{Deserialize, Serialize};

use super::domain::{
    BlogPost, City, Customer, District, Faq, FinancingRequest, Lead, Project, Property, Unit,
    UserAccount,
};

/// Everything the listing screens read, as returned by the hosted backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub properties: Vec<Property>,
    pub projects: Vec<Project>,
    pub units: Vec<Unit>,
    pub customers: Vec<Customer>,
    pub leads: Vec<Lead>,
    pub financing_requests: Vec<FinancingRequest>,
    pub faqs: Vec<Faq>,
    pub blog_posts: Vec<BlogPost>,
    pub cities: Vec<City>,
    pub districts: Vec<District>,
    pub users: Vec<UserAccount>,
}

/// Data-access handle for the hosted backend.
///
/// Constructed once at start-up and passed to whatever needs it. Reads return
/// records in the backend's order; filtering happens in the catalog service.
pub trait CatalogStore: Send + Sync {
    fn properties(&self) -> Result<Vec<Property>, RepositoryError>;
    fn projects(&self) -> Result<Vec<Project>, RepositoryError>;
    fn units(&self) -> Result<Vec<Unit>, RepositoryError>;
    fn customers(&self) -> Result<Vec<Customer>, RepositoryError>;
    fn leads(&self) -> Result<Vec<Lead>, RepositoryError>;
    fn financing_requests(&self) -> Result<Vec<FinancingRequest>, RepositoryError>;
    fn faqs(&self) -> Result<Vec<Faq>, RepositoryError>;
    fn blog_posts(&self) -> Result<Vec<BlogPost>, RepositoryError>;
    fn cities(&self) -> Result<Vec<City>, RepositoryError>;
    fn districts(&self) -> Result<Vec<District>, RepositoryError>;
    fn users(&self) -> Result<Vec<UserAccount>, RepositoryError>;

    /// Insert or replace listings by ID, returning how many were written.
    fn upsert_properties(&self, properties: Vec<Property>) -> Result<usize, RepositoryError>;
}

/// Error enumeration for backend failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("access denied by backend policy")]
    Forbidden,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}
