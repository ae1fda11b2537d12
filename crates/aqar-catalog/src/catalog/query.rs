//! Query-string shapes accepted by the catalog routes and their conversion
//! into typed criteria.

use serde::Deserialize;

use super::criteria::{
    BlogCriteria, CityCriteria, CriteriaError, CustomerCriteria, DistrictCriteria, FaqCriteria,
    FinancingCriteria, LeadCriteria, ProjectCriteria, PropertyCriteria, UnitCriteria,
    UserCriteria,
};
use super::filter::{Exact, Range, TextSearch};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyQuery {
    pub city: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_area: Option<String>,
    pub max_area: Option<String>,
    /// Room bucket such as `3` or `5+`.
    pub rooms: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<PropertyQuery> for PropertyCriteria {
    type Error = CriteriaError;

    fn try_from(query: PropertyQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            city: Exact::from_text_param(query.city.as_deref()),
            category: Exact::from_param(query.category.as_deref())?,
            status: Exact::from_param(query.status.as_deref())?,
            featured: Exact::from_flag_param(query.featured.as_deref())?,
            price: Range::from_bounds(
                Range::bound_param("min_price", query.min_price.as_deref())?,
                Range::bound_param("max_price", query.max_price.as_deref())?,
            ),
            area: Range::from_bounds(
                Range::bound_param("min_area", query.min_area.as_deref())?,
                Range::bound_param("max_area", query.max_area.as_deref())?,
            ),
            bedrooms: query
                .rooms
                .as_deref()
                .map(Range::<u32>::from_bucket)
                .transpose()?
                .unwrap_or_default(),
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectQuery {
    pub city: Option<String>,
    pub status: Option<String>,
    pub project_type: Option<String>,
    pub investment: Option<String>,
    pub featured: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<ProjectQuery> for ProjectCriteria {
    type Error = CriteriaError;

    fn try_from(query: ProjectQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            city: Exact::from_text_param(query.city.as_deref()),
            status: Exact::from_param(query.status.as_deref())?,
            project_type: Exact::from_text_param(query.project_type.as_deref()),
            investment: Exact::from_flag_param(query.investment.as_deref())?,
            featured: Exact::from_flag_param(query.featured.as_deref())?,
            price: Range::from_bounds(
                Range::bound_param("min_price", query.min_price.as_deref())?,
                Range::bound_param("max_price", query.max_price.as_deref())?,
            ),
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnitQuery {
    pub project_id: Option<String>,
    pub unit_type: Option<String>,
    pub status: Option<String>,
    pub sale_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_area: Option<String>,
    pub max_area: Option<String>,
    pub bedrooms: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<UnitQuery> for UnitCriteria {
    type Error = CriteriaError;

    fn try_from(query: UnitQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            project_id: Exact::from_text_param(query.project_id.as_deref()),
            unit_type: Exact::from_text_param(query.unit_type.as_deref()),
            status: Exact::from_param(query.status.as_deref())?,
            sale_type: Exact::from_param(query.sale_type.as_deref())?,
            price: Range::from_bounds(
                Range::bound_param("min_price", query.min_price.as_deref())?,
                Range::bound_param("max_price", query.max_price.as_deref())?,
            ),
            area: Range::from_bounds(
                Range::bound_param("min_area", query.min_area.as_deref())?,
                Range::bound_param("max_area", query.max_area.as_deref())?,
            ),
            bedrooms: query
                .bedrooms
                .as_deref()
                .map(Range::<u32>::from_bucket)
                .transpose()?
                .unwrap_or_default(),
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerQuery {
    pub customer_type: Option<String>,
    pub source: Option<String>,
    pub active: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<CustomerQuery> for CustomerCriteria {
    type Error = CriteriaError;

    fn try_from(query: CustomerQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            customer_type: Exact::from_text_param(query.customer_type.as_deref()),
            source: Exact::from_text_param(query.source.as_deref()),
            active: Exact::from_flag_param(query.active.as_deref())?,
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<LeadQuery> for LeadCriteria {
    type Error = CriteriaError;

    fn try_from(query: LeadQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            status: Exact::from_param(query.status.as_deref())?,
            priority: Exact::from_param(query.priority.as_deref())?,
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinancingQuery {
    pub status: Option<String>,
    pub request_type: Option<String>,
    pub min_income: Option<String>,
    pub max_income: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<FinancingQuery> for FinancingCriteria {
    type Error = CriteriaError;

    fn try_from(query: FinancingQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            status: Exact::from_param(query.status.as_deref())?,
            request_type: Exact::from_param(query.request_type.as_deref())?,
            monthly_income: Range::from_bounds(
                Range::bound_param("min_income", query.min_income.as_deref())?,
                Range::bound_param("max_income", query.max_income.as_deref())?,
            ),
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

impl From<FaqQuery> for FaqCriteria {
    fn from(query: FaqQuery) -> Self {
        Self {
            category: Exact::from_text_param(query.category.as_deref()),
            search: TextSearch::from_param(query.q.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<BlogQuery> for BlogCriteria {
    type Error = CriteriaError;

    fn try_from(query: BlogQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            category: Exact::from_text_param(query.category.as_deref()),
            featured: Exact::from_flag_param(query.featured.as_deref())?,
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityQuery {
    pub active: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<CityQuery> for CityCriteria {
    type Error = CriteriaError;

    fn try_from(query: CityQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            active: Exact::from_flag_param(query.active.as_deref())?,
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistrictQuery {
    pub city_id: Option<String>,
    pub active: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<DistrictQuery> for DistrictCriteria {
    type Error = CriteriaError;

    fn try_from(query: DistrictQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            city_id: Exact::from_text_param(query.city_id.as_deref()),
            active: Exact::from_flag_param(query.active.as_deref())?,
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub role: Option<String>,
    pub q: Option<String>,
}

impl TryFrom<UserQuery> for UserCriteria {
    type Error = CriteriaError;

    fn try_from(query: UserQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            role: Exact::from_param(query.role.as_deref())?,
            search: TextSearch::from_param(query.q.as_deref()),
        })
    }
}
