use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::criteria::CriteriaError;

/// Declares a closed vocabulary that serializes as snake_case and also
/// accepts the Arabic label shown in the storefront and dashboard.
macro_rules! labelled_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => ($key:literal, $arabic:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $arabic),+
                }
            }
        }

        impl FromStr for $name {
            type Err = CriteriaError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let value = raw.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| {
                        value.eq_ignore_ascii_case(candidate.key()) || value == candidate.label()
                    })
                    .ok_or_else(|| CriteriaError::UnknownValue {
                        field: $field,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

labelled_vocabulary! {
    /// Kind of standalone property listed on the storefront.
    PropertyCategory, "category" {
        Apartment => ("apartment", "شقة"),
        Villa => ("villa", "فيلا"),
        Land => ("land", "أرض"),
        Commercial => ("commercial", "تجاري"),
    }
}

labelled_vocabulary! {
    /// Whether a property or unit is offered for sale or for rent.
    ListingStatus, "status" {
        ForSale => ("for_sale", "للبيع"),
        ForRent => ("for_rent", "للإيجار"),
    }
}

labelled_vocabulary! {
    /// Construction stage of a development project.
    ProjectStatus, "status" {
        OffPlan => ("off_plan", "على الخارطة"),
        UnderConstruction => ("under_construction", "قيد الإنشاء"),
        Ready => ("ready", "جاهز"),
    }
}

labelled_vocabulary! {
    /// Inventory state of a unit inside a project.
    UnitStatus, "status" {
        Available => ("available", "متاح"),
        Reserved => ("reserved", "محجوز"),
        Sold => ("sold", "مباع"),
    }
}

labelled_vocabulary! {
    /// Sales pipeline stage of a lead.
    LeadStatus, "status" {
        New => ("new", "جديد"),
        Contacted => ("contacted", "تم التواصل"),
        Qualified => ("qualified", "مؤهل"),
        Proposal => ("proposal", "عرض سعر"),
        Negotiation => ("negotiation", "تفاوض"),
        Won => ("won", "مكتمل"),
        Lost => ("lost", "خاسر"),
    }
}

labelled_vocabulary! {
    LeadPriority, "priority" {
        Low => ("low", "منخفضة"),
        Medium => ("medium", "متوسطة"),
        High => ("high", "عالية"),
        Urgent => ("urgent", "عاجلة"),
    }
}

labelled_vocabulary! {
    /// Review state of a financing request.
    FinancingStatus, "status" {
        Pending => ("pending", "قيد الانتظار"),
        UnderReview => ("under_review", "قيد المراجعة"),
        Approved => ("approved", "موافق عليه"),
        Rejected => ("rejected", "مرفوض"),
        Completed => ("completed", "مكتمل"),
    }
}

labelled_vocabulary! {
    FinancingType, "request_type" {
        Mortgage => ("mortgage", "تمويل عقاري"),
        Refinance => ("refinance", "إعادة تمويل"),
        HousingSupport => ("housing_support", "دعم سكني"),
        DefaultSolution => ("default_solution", "حل تعثر"),
    }
}

labelled_vocabulary! {
    /// Dashboard role granted to a back-office account.
    AppRole, "role" {
        SuperAdmin => ("super_admin", "مدير عام"),
        Admin => ("admin", "مدير"),
        ContentManager => ("content_manager", "مدير محتوى"),
        FinanceManager => ("finance_manager", "مدير مالي"),
        Viewer => ("viewer", "مشاهد"),
    }
}

/// Standalone property listing (resale or rental).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<PropertyCategory>,
    #[serde(default)]
    pub status: Option<ListingStatus>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub price: u64,
    pub area: f64,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Off-plan or completed development marketed as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub price_from: Option<u64>,
    #[serde(default)]
    pub price_to: Option<u64>,
    #[serde(default)]
    pub completion_percentage: u8,
    #[serde(default)]
    pub total_units: u32,
    #[serde(default)]
    pub available_units: u32,
    #[serde(default)]
    pub roi_percentage: Option<f64>,
    #[serde(default)]
    pub is_investment: bool,
    #[serde(default)]
    pub is_featured: bool,
}

/// Sellable unit inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub project_name: Option<String>,
    pub unit_number: String,
    #[serde(default)]
    pub unit_type: Option<String>,
    #[serde(default)]
    pub floor_number: Option<i32>,
    pub area: f64,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    pub price: u64,
    #[serde(default)]
    pub status: Option<UnitStatus>,
    #[serde(default)]
    pub sale_type: Option<ListingStatus>,
    #[serde(default)]
    pub expected_delivery: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub customer_type: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

/// Sales lead joined with the customer and project names shown in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub status: Option<LeadStatus>,
    #[serde(default)]
    pub priority: Option<LeadPriority>,
    #[serde(default)]
    pub estimated_value: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingRequest {
    pub id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub request_type: FinancingType,
    #[serde(default)]
    pub status: Option<FinancingStatus>,
    #[serde(default)]
    pub monthly_income: Option<u64>,
    #[serde(default)]
    pub down_payment_available: Option<u64>,
    #[serde(default)]
    pub preferred_bank: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_on: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub city_id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

/// Back-office account and its dashboard role, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<AppRole>,
}

const fn active_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_parse_keys_and_arabic_labels() {
        assert_eq!("villa".parse::<PropertyCategory>().unwrap(), PropertyCategory::Villa);
        assert_eq!("فيلا".parse::<PropertyCategory>().unwrap(), PropertyCategory::Villa);
        assert_eq!(" FOR_RENT ".parse::<ListingStatus>().unwrap(), ListingStatus::ForRent);
        assert_eq!("تفاوض".parse::<LeadStatus>().unwrap(), LeadStatus::Negotiation);
    }

    #[test]
    fn unknown_vocabulary_values_name_the_field() {
        let error = "castle".parse::<PropertyCategory>().unwrap_err();
        assert_eq!(
            error,
            CriteriaError::UnknownValue {
                field: "category",
                value: "castle".to_string(),
            }
        );
    }

    #[test]
    fn records_deserialize_with_sparse_fields() {
        let property: Property = serde_json::from_value(serde_json::json!({
            "id": "p-1",
            "title": "أرض تجارية",
            "price": 900000,
            "area": 625.0,
            "category": "land"
        }))
        .expect("sparse property parses");

        assert_eq!(property.category, Some(PropertyCategory::Land));
        assert!(property.bedrooms.is_none());
        assert!(!property.is_featured);

        let city: City = serde_json::from_value(serde_json::json!({
            "id": "c-1",
            "name": "الرياض"
        }))
        .expect("city parses");
        assert!(city.is_active);
    }
}
