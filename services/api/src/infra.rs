use aqar_catalog::catalog::{
    BlogPost, CatalogSnapshot, CatalogStore, City, Customer, District, Faq, FinancingRequest,
    Lead, Project, Property, RepositoryError, Unit, UserAccount,
};
use aqar_catalog::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the hosted backend, seeded at start-up.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCatalog {
    snapshot: Arc<RwLock<CatalogSnapshot>>,
}

impl InMemoryCatalog {
    pub(crate) fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    fn read<T: Clone>(
        &self,
        select: impl Fn(&CatalogSnapshot) -> &Vec<T>,
    ) -> Result<Vec<T>, RepositoryError> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| RepositoryError::Unavailable("catalog lock poisoned".to_string()))?;
        Ok(select(&guard).clone())
    }
}

impl CatalogStore for InMemoryCatalog {
    fn properties(&self) -> Result<Vec<Property>, RepositoryError> {
        self.read(|snapshot| &snapshot.properties)
    }

    fn projects(&self) -> Result<Vec<Project>, RepositoryError> {
        self.read(|snapshot| &snapshot.projects)
    }

    fn units(&self) -> Result<Vec<Unit>, RepositoryError> {
        self.read(|snapshot| &snapshot.units)
    }

    fn customers(&self) -> Result<Vec<Customer>, RepositoryError> {
        self.read(|snapshot| &snapshot.customers)
    }

    fn leads(&self) -> Result<Vec<Lead>, RepositoryError> {
        self.read(|snapshot| &snapshot.leads)
    }

    fn financing_requests(&self) -> Result<Vec<FinancingRequest>, RepositoryError> {
        self.read(|snapshot| &snapshot.financing_requests)
    }

    fn faqs(&self) -> Result<Vec<Faq>, RepositoryError> {
        self.read(|snapshot| &snapshot.faqs)
    }

    fn blog_posts(&self) -> Result<Vec<BlogPost>, RepositoryError> {
        self.read(|snapshot| &snapshot.blog_posts)
    }

    fn cities(&self) -> Result<Vec<City>, RepositoryError> {
        self.read(|snapshot| &snapshot.cities)
    }

    fn districts(&self) -> Result<Vec<District>, RepositoryError> {
        self.read(|snapshot| &snapshot.districts)
    }

    fn users(&self) -> Result<Vec<UserAccount>, RepositoryError> {
        self.read(|snapshot| &snapshot.users)
    }

    fn upsert_properties(&self, properties: Vec<Property>) -> Result<usize, RepositoryError> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::Unavailable("catalog lock poisoned".to_string()))?;
        let written = properties.len();
        for property in properties {
            match guard
                .properties
                .iter_mut()
                .find(|existing| existing.id == property.id)
            {
                Some(existing) => *existing = property,
                None => guard.properties.push(property),
            }
        }
        Ok(written)
    }
}

/// Read a JSON catalog snapshot exported from the backend.
pub(crate) fn load_snapshot(path: &Path) -> Result<CatalogSnapshot, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&raw)?;
    info!(
        path = %path.display(),
        properties = snapshot.properties.len(),
        projects = snapshot.projects.len(),
        leads = snapshot.leads.len(),
        "loaded catalog snapshot"
    );
    Ok(snapshot)
}
