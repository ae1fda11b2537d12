use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::catalog::domain::{
    AppRole, BlogPost, City, Customer, District, Faq, FinancingRequest, FinancingStatus,
    FinancingType, Lead, LeadPriority, LeadStatus, ListingStatus, Project, ProjectStatus,
    Property, PropertyCategory, Unit, UnitStatus, UserAccount,
};
use crate::catalog::service::CatalogService;
use crate::catalog::store::{CatalogSnapshot, CatalogStore, RepositoryError};

pub(super) fn property(
    id: &str,
    title: &str,
    city: &str,
    category: PropertyCategory,
    price: u64,
    bedrooms: Option<u32>,
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        category: Some(category),
        status: Some(ListingStatus::ForSale),
        city: Some(city.to_string()),
        district: None,
        address: None,
        price,
        area: 180.0,
        bedrooms,
        bathrooms: bedrooms.map(|rooms| rooms.saturating_sub(1).max(1)),
        is_featured: false,
        created_at: None,
    }
}

pub(super) fn properties() -> Vec<Property> {
    let mut villa = property(
        "p-3",
        "Riyadh Tower Villa",
        "Riyadh",
        PropertyCategory::Villa,
        1_200_000,
        Some(5),
    );
    villa.district = Some("Al Narjis".to_string());
    villa.is_featured = true;

    let mut rental = property(
        "p-4",
        "شقة للإيجار",
        "الخبر",
        PropertyCategory::Apartment,
        60_000,
        Some(2),
    );
    rental.status = Some(ListingStatus::ForRent);
    rental.address = Some("Corniche Road".to_string());

    vec![
        property(
            "p-1",
            "riyadh tower apartment",
            "Riyadh",
            PropertyCategory::Apartment,
            650_000,
            Some(3),
        ),
        property(
            "p-2",
            "Jeddah plot",
            "Jeddah",
            PropertyCategory::Land,
            850_000,
            Some(0),
        ),
        villa,
        rental,
        property(
            "p-5",
            "Dammam office floor",
            "Dammam",
            PropertyCategory::Commercial,
            2_400_000,
            None,
        ),
    ]
}

pub(super) fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "pr-1".to_string(),
            name: "أبراج المستقبل".to_string(),
            developer: Some("Future Developments".to_string()),
            project_type: Some("شقق".to_string()),
            status: Some(ProjectStatus::Ready),
            city: Some("جدة".to_string()),
            district: Some("الشاطئ".to_string()),
            price_from: Some(690_000),
            price_to: Some(1_100_000),
            completion_percentage: 100,
            total_units: 120,
            available_units: 14,
            roi_percentage: None,
            is_investment: false,
            is_featured: true,
        },
        Project {
            id: "pr-2".to_string(),
            name: "برج الخليج التجاري".to_string(),
            developer: None,
            project_type: Some("تجاري".to_string()),
            status: Some(ProjectStatus::OffPlan),
            city: Some("الخبر".to_string()),
            district: None,
            price_from: Some(500_000),
            price_to: None,
            completion_percentage: 15,
            total_units: 40,
            available_units: 40,
            roi_percentage: Some(12.0),
            is_investment: true,
            is_featured: false,
        },
    ]
}

pub(super) fn units() -> Vec<Unit> {
    let unit = |id: &str, number: &str, bedrooms: u32, price: u64, status: UnitStatus| Unit {
        id: id.to_string(),
        project_id: "pr-1".to_string(),
        project_name: Some("أبراج المستقبل".to_string()),
        unit_number: number.to_string(),
        unit_type: Some("شقة".to_string()),
        floor_number: Some(3),
        area: 120.0 + f64::from(bedrooms) * 20.0,
        bedrooms: Some(bedrooms),
        bathrooms: Some(2),
        price,
        status: Some(status),
        sale_type: Some(ListingStatus::ForSale),
        expected_delivery: None,
    };

    vec![
        unit("u-1", "A-101", 2, 690_000, UnitStatus::Available),
        unit("u-2", "A-102", 3, 820_000, UnitStatus::Reserved),
        unit("u-3", "B-201", 4, 1_050_000, UnitStatus::Available),
    ]
}

pub(super) fn leads() -> Vec<Lead> {
    let lead = |id: &str, customer: &str, status: Option<LeadStatus>| Lead {
        id: id.to_string(),
        customer_name: Some(customer.to_string()),
        project_name: Some("أبراج المستقبل".to_string()),
        status,
        priority: Some(LeadPriority::Medium),
        estimated_value: Some(750_000),
        created_at: None,
    };

    vec![
        lead("l-1", "Sara Al-Qahtani", Some(LeadStatus::New)),
        lead("l-2", "Fahad Al-Otaibi", Some(LeadStatus::Negotiation)),
        lead("l-3", "Noura Al-Harbi", Some(LeadStatus::New)),
        lead("l-4", "Khalid Al-Shehri", None),
    ]
}

pub(super) fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        properties: properties(),
        projects: projects(),
        units: units(),
        customers: vec![Customer {
            id: "c-1".to_string(),
            full_name: "Sara Al-Qahtani".to_string(),
            phone: Some("0551234567".to_string()),
            email: Some("sara@example.com".to_string()),
            customer_type: Some("individual".to_string()),
            source: Some("website".to_string()),
            is_active: true,
        }],
        leads: leads(),
        financing_requests: vec![
            FinancingRequest {
                id: "f-1".to_string(),
                customer_name: Some("Fahad Al-Otaibi".to_string()),
                customer_phone: Some("0509876543".to_string()),
                request_type: FinancingType::Mortgage,
                status: Some(FinancingStatus::Pending),
                monthly_income: Some(18_000),
                down_payment_available: Some(100_000),
                preferred_bank: None,
            },
            FinancingRequest {
                id: "f-2".to_string(),
                customer_name: Some("Noura Al-Harbi".to_string()),
                customer_phone: None,
                request_type: FinancingType::HousingSupport,
                status: Some(FinancingStatus::Approved),
                monthly_income: None,
                down_payment_available: None,
                preferred_bank: Some("Al Rajhi".to_string()),
            },
        ],
        faqs: vec![Faq {
            id: "q-1".to_string(),
            question: "هل يتوفر تمويل عقاري؟".to_string(),
            answer: "نعم، بالتعاون مع البنوك المحلية.".to_string(),
            category: Some("financing".to_string()),
            display_order: 1,
        }],
        blog_posts: vec![BlogPost {
            id: "b-1".to_string(),
            slug: "investment-guide".to_string(),
            title: "دليل الاستثمار العقاري".to_string(),
            excerpt: "كل ما تحتاج معرفته قبل الاستثمار.".to_string(),
            category: Some("الاستثمار".to_string()),
            author: None,
            published_on: None,
            featured: true,
        }],
        cities: vec![
            City {
                id: "riyadh".to_string(),
                name: "الرياض".to_string(),
                name_en: Some("Riyadh".to_string()),
                is_active: true,
            },
            City {
                id: "abha".to_string(),
                name: "أبها".to_string(),
                name_en: Some("Abha".to_string()),
                is_active: false,
            },
        ],
        districts: vec![District {
            id: "narjis".to_string(),
            city_id: "riyadh".to_string(),
            name: "النرجس".to_string(),
            name_en: Some("Al Narjis".to_string()),
            city_name: Some("الرياض".to_string()),
            is_active: true,
        }],
        users: vec![UserAccount {
            id: "u-admin".to_string(),
            email: Some("admin@example.com".to_string()),
            full_name: Some("Site Admin".to_string()),
            phone: None,
            role: Some(AppRole::Admin),
        }],
    }
}

#[derive(Default)]
pub(super) struct MemoryCatalog {
    snapshot: Mutex<CatalogSnapshot>,
}

impl MemoryCatalog {
    pub(super) fn seeded() -> Self {
        Self {
            snapshot: Mutex::new(snapshot()),
        }
    }

    fn read<T: Clone>(
        &self,
        select: impl Fn(&CatalogSnapshot) -> &Vec<T>,
    ) -> Result<Vec<T>, RepositoryError> {
        let guard = self.snapshot.lock().expect("catalog mutex poisoned");
        Ok(select(&guard).clone())
    }
}

impl CatalogStore for MemoryCatalog {
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
        let mut guard = self.snapshot.lock().expect("catalog mutex poisoned");
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

/// Store whose backend rejects or drops every call.
pub(super) struct FailingCatalog {
    pub(super) error: fn() -> RepositoryError,
}

impl FailingCatalog {
    pub(super) fn unavailable() -> Self {
        Self {
            error: || RepositoryError::Unavailable("connection reset".to_string()),
        }
    }

    pub(super) fn forbidden() -> Self {
        Self {
            error: || RepositoryError::Forbidden,
        }
    }
}

impl CatalogStore for FailingCatalog {
    fn properties(&self) -> Result<Vec<Property>, RepositoryError> {
        Err((self.error)())
    }

    fn projects(&self) -> Result<Vec<Project>, RepositoryError> {
        Err((self.error)())
    }

    fn units(&self) -> Result<Vec<Unit>, RepositoryError> {
        Err((self.error)())
    }

    fn customers(&self) -> Result<Vec<Customer>, RepositoryError> {
        Err((self.error)())
    }

    fn leads(&self) -> Result<Vec<Lead>, RepositoryError> {
        Err((self.error)())
    }

    fn financing_requests(&self) -> Result<Vec<FinancingRequest>, RepositoryError> {
        Err((self.error)())
    }

    fn faqs(&self) -> Result<Vec<Faq>, RepositoryError> {
        Err((self.error)())
    }

    fn blog_posts(&self) -> Result<Vec<BlogPost>, RepositoryError> {
        Err((self.error)())
    }

    fn cities(&self) -> Result<Vec<City>, RepositoryError> {
        Err((self.error)())
    }

    fn districts(&self) -> Result<Vec<District>, RepositoryError> {
        Err((self.error)())
    }

    fn users(&self) -> Result<Vec<UserAccount>, RepositoryError> {
        Err((self.error)())
    }

    fn upsert_properties(&self, _properties: Vec<Property>) -> Result<usize, RepositoryError> {
        Err((self.error)())
    }
}

pub(super) fn build_service() -> (Arc<CatalogService<MemoryCatalog>>, Arc<MemoryCatalog>) {
    let store = Arc::new(MemoryCatalog::seeded());
    let service = Arc::new(CatalogService::new(store.clone(), 12));
    (service, store)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}
