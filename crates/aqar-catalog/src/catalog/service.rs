use std::fmt::Debug;
use std::sync::Arc;

use tracing::{debug, info};

use super::criteria::{
    BlogCriteria, CityCriteria, CustomerCriteria, DistrictCriteria, FaqCriteria,
    FinancingCriteria, LeadCriteria, ProjectCriteria, PropertyCriteria, UnitCriteria,
    UserCriteria,
};
use super::domain::{
    BlogPost, City, Customer, District, Faq, FinancingRequest, FinancingStatus, Lead, LeadStatus,
    Project, Property, Unit, UserAccount,
};
use super::filter::{filter, Matches};
use super::import::{PropertyImportError, PropertyImporter};
use super::store::{CatalogStore, RepositoryError};
use super::summary::{paginate, tally, Page, PageRequest, StatusTally};

/// Filtered page plus whether any constraint was active (drives the reset control).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Listing<T> {
    #[serde(flatten)]
    pub page: Page<T>,
    pub filtered: bool,
}

/// Service composing the store handle, the matching engine, and pagination.
pub struct CatalogService<S> {
    store: Arc<S>,
    default_page_size: usize,
}

impl<S> CatalogService<S>
where
    S: CatalogStore + 'static,
{
    pub fn new(store: Arc<S>, default_page_size: usize) -> Self {
        Self {
            store,
            default_page_size,
        }
    }

    pub fn page_request(&self, page: Option<usize>, per_page: Option<usize>) -> PageRequest {
        PageRequest::new(page, per_page, self.default_page_size)
    }

    pub fn properties(
        &self,
        criteria: &PropertyCriteria,
        page: PageRequest,
    ) -> Result<Listing<Property>, CatalogServiceError> {
        let records = self.store.properties()?;
        Ok(listing("properties", &records, criteria, page))
    }

    pub fn projects(
        &self,
        criteria: &ProjectCriteria,
        page: PageRequest,
    ) -> Result<Listing<Project>, CatalogServiceError> {
        let records = self.store.projects()?;
        Ok(listing("projects", &records, criteria, page))
    }

    pub fn units(
        &self,
        criteria: &UnitCriteria,
        page: PageRequest,
    ) -> Result<Listing<Unit>, CatalogServiceError> {
        let records = self.store.units()?;
        Ok(listing("units", &records, criteria, page))
    }

    pub fn customers(
        &self,
        criteria: &CustomerCriteria,
        page: PageRequest,
    ) -> Result<Listing<Customer>, CatalogServiceError> {
        let records = self.store.customers()?;
        Ok(listing("customers", &records, criteria, page))
    }

    pub fn leads(
        &self,
        criteria: &LeadCriteria,
        page: PageRequest,
    ) -> Result<Listing<Lead>, CatalogServiceError> {
        let records = self.store.leads()?;
        Ok(listing("leads", &records, criteria, page))
    }

    pub fn financing_requests(
        &self,
        criteria: &FinancingCriteria,
        page: PageRequest,
    ) -> Result<Listing<FinancingRequest>, CatalogServiceError> {
        let records = self.store.financing_requests()?;
        Ok(listing("financing_requests", &records, criteria, page))
    }

    pub fn faqs(
        &self,
        criteria: &FaqCriteria,
        page: PageRequest,
    ) -> Result<Listing<Faq>, CatalogServiceError> {
        let records = self.store.faqs()?;
        Ok(listing("faqs", &records, criteria, page))
    }

    pub fn blog_posts(
        &self,
        criteria: &BlogCriteria,
        page: PageRequest,
    ) -> Result<Listing<BlogPost>, CatalogServiceError> {
        let records = self.store.blog_posts()?;
        Ok(listing("blog_posts", &records, criteria, page))
    }

    pub fn cities(
        &self,
        criteria: &CityCriteria,
        page: PageRequest,
    ) -> Result<Listing<City>, CatalogServiceError> {
        let records = self.store.cities()?;
        Ok(listing("cities", &records, criteria, page))
    }

    pub fn districts(
        &self,
        criteria: &DistrictCriteria,
        page: PageRequest,
    ) -> Result<Listing<District>, CatalogServiceError> {
        let records = self.store.districts()?;
        Ok(listing("districts", &records, criteria, page))
    }

    pub fn users(
        &self,
        criteria: &UserCriteria,
        page: PageRequest,
    ) -> Result<Listing<UserAccount>, CatalogServiceError> {
        let records = self.store.users()?;
        Ok(listing("users", &records, criteria, page))
    }

    /// Per-stage counts over every lead, independent of the active filter.
    pub fn lead_status_counts(&self) -> Result<StatusTally<LeadStatus>, CatalogServiceError> {
        let leads = self.store.leads()?;
        Ok(tally(&leads, |lead| lead.status))
    }

    pub fn financing_status_counts(
        &self,
    ) -> Result<StatusTally<FinancingStatus>, CatalogServiceError> {
        let requests = self.store.financing_requests()?;
        Ok(tally(&requests, |request| request.status))
    }

    /// Parse a listing export and write it through the store.
    pub fn import_properties<R: std::io::Read>(
        &self,
        reader: R,
    ) -> Result<usize, CatalogServiceError> {
        let properties = PropertyImporter::from_reader(reader)?;
        let written = self.store.upsert_properties(properties)?;
        info!(written, "imported listing export");
        Ok(written)
    }
}

fn listing<R, C>(domain: &'static str, records: &[R], criteria: &C, page: PageRequest) -> Listing<R>
where
    R: Clone,
    C: Matches<R> + Debug,
{
    let matched = filter(records, criteria);
    debug!(
        domain,
        total = records.len(),
        matched = matched.len(),
        ?criteria,
        "filtered catalog records"
    );

    Listing {
        page: paginate(&matched, page).map(R::clone),
        filtered: !criteria.is_unconstrained(),
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Import(#[from] PropertyImportError),
}
