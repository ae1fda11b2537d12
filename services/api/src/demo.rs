use crate::infra::{load_snapshot, InMemoryCatalog};
use aqar_catalog::catalog::query::{ProjectQuery, PropertyQuery};
use aqar_catalog::catalog::{
    CatalogService, CatalogSnapshot, City, Exact, InvestmentInput, InvestmentProjection, Lead,
    LeadCriteria, LeadPriority, LeadStatus, Listing, ListingStatus, Project, ProjectCriteria,
    ProjectStatus, Property, PropertyCategory, PropertyCriteria, PropertyImporter, Unit,
    UnitStatus,
};
use aqar_catalog::config::CatalogConfig;
use aqar_catalog::error::AppError;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// City tabs shown above the project grid; the first one clears the filter.
const CITY_TABS: [&str; 4] = ["الكل", "الرياض", "جدة", "الدمام"];

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// City to match exactly, as stored on the listing
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Category key or Arabic label (apartment, villa, land, commercial)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Offer type (for_sale or for_rent)
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Restrict to featured (true) or non-featured (false) listings
    #[arg(long)]
    pub(crate) featured: Option<String>,
    #[arg(long)]
    pub(crate) min_price: Option<u64>,
    #[arg(long)]
    pub(crate) max_price: Option<u64>,
    #[arg(long)]
    pub(crate) min_area: Option<f64>,
    #[arg(long)]
    pub(crate) max_area: Option<f64>,
    /// Bedroom bucket such as 3 or 5+
    #[arg(long)]
    pub(crate) rooms: Option<String>,
    /// Free-text search over title, address, city and district
    #[arg(long, short = 'q')]
    pub(crate) query: Option<String>,
    /// Listing export (CSV) to search instead of the built-in catalog
    #[arg(long, conflicts_with = "seed")]
    pub(crate) csv: Option<PathBuf>,
    /// Catalog snapshot (JSON) to search instead of the built-in catalog
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
    #[arg(long)]
    pub(crate) page: Option<usize>,
    #[arg(long)]
    pub(crate) per_page: Option<usize>,
    /// Print the page as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct InvestArgs {
    /// Amount invested in riyals
    #[arg(long)]
    pub(crate) principal: u64,
    /// Expected annual return in percent
    #[arg(long, default_value_t = 10.0)]
    pub(crate) roi: f64,
    /// Holding period in years
    #[arg(long, default_value_t = 5)]
    pub(crate) years: u32,
    /// Print the projection as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Catalog snapshot (JSON) to use instead of the built-in catalog
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
    /// Skip the return calculator portion of the demo
    #[arg(long)]
    pub(crate) skip_investment: bool,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        city,
        category,
        status,
        featured,
        min_price,
        max_price,
        min_area,
        max_area,
        rooms,
        query,
        csv,
        seed,
        page,
        per_page,
        json,
    } = args;

    let criteria = PropertyCriteria::try_from(PropertyQuery {
        city,
        category,
        status,
        featured,
        min_price: min_price.map(|price| price.to_string()),
        max_price: max_price.map(|price| price.to_string()),
        min_area: min_area.map(|area| area.to_string()),
        max_area: max_area.map(|area| area.to_string()),
        rooms,
        q: query,
    })?;

    let snapshot = match (csv, seed) {
        (Some(path), _) => CatalogSnapshot {
            properties: PropertyImporter::from_path(path)?,
            ..CatalogSnapshot::default()
        },
        (None, Some(path)) => load_snapshot(&path)?,
        (None, None) => demo_snapshot(),
    };

    let service = catalog_service(snapshot);
    let listing = service.properties(&criteria, service.page_request(page, per_page))?;

    if json {
        let rendered = serde_json::to_string_pretty(&listing).map_err(AppError::Render)?;
        println!("{rendered}");
    } else {
        render_property_listing(&listing);
    }
    Ok(())
}

pub(crate) fn run_invest(args: InvestArgs) -> Result<(), AppError> {
    let input = InvestmentInput {
        principal: args.principal,
        annual_roi_percent: args.roi,
        years: args.years,
    };
    let projection = input.project()?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&projection).map_err(AppError::Render)?;
        println!("{rendered}");
    } else {
        render_projection(&input, &projection);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let snapshot = match args.seed {
        Some(path) => load_snapshot(&path)?,
        None => demo_snapshot(),
    };
    let service = catalog_service(snapshot);
    let first_page = service.page_request(None, None);

    println!("Catalog demo");
    println!("\nProjects by city tab");
    for tab in CITY_TABS {
        let criteria = ProjectCriteria::try_from(ProjectQuery {
            city: Some(tab.to_string()),
            ..ProjectQuery::default()
        })?;
        let listing = service.projects(&criteria, first_page)?;
        let names: Vec<&str> = listing
            .page
            .items
            .iter()
            .map(|project| project.name.as_str())
            .collect();
        println!("- {} ({}): {}", tab, listing.page.total, names.join("، "));
    }

    println!("\nReady projects");
    let ready = ProjectCriteria {
        status: Exact::Is(ProjectStatus::Ready),
        ..ProjectCriteria::default()
    };
    for project in service.projects(&ready, first_page)?.page.items {
        println!(
            "- {} | {} | from {} SAR",
            project.name,
            project.city.as_deref().unwrap_or("-"),
            project.price_from.map_or_else(|| "-".to_string(), group_digits)
        );
    }

    println!("\nFamily homes (5+ bedrooms)");
    let large = PropertyCriteria::try_from(PropertyQuery {
        rooms: Some("5+".to_string()),
        ..PropertyQuery::default()
    })?;
    render_property_listing(&service.properties(&large, first_page)?);

    println!("\nLead pipeline");
    let counts = service.lead_status_counts()?;
    for status in LeadStatus::ALL {
        println!("- {}: {}", status.label(), counts.count(status));
    }
    if counts.unassigned > 0 {
        println!("- unassigned: {}", counts.unassigned);
    }
    let urgent = LeadCriteria {
        priority: Exact::Is(LeadPriority::Urgent),
        ..LeadCriteria::default()
    };
    let urgent = service.leads(&urgent, first_page)?;
    println!("- {} urgent lead(s) need follow-up", urgent.page.total);

    if args.skip_investment {
        return Ok(());
    }

    println!("\nReturn calculator");
    let input = InvestmentInput {
        principal: 500_000,
        annual_roi_percent: 10.0,
        years: 5,
    };
    render_projection(&input, &input.project()?);
    Ok(())
}

fn catalog_service(snapshot: CatalogSnapshot) -> CatalogService<InMemoryCatalog> {
    CatalogService::new(
        Arc::new(InMemoryCatalog::new(snapshot)),
        CatalogConfig::DEFAULT_PAGE_SIZE,
    )
}

fn render_property_listing(listing: &Listing<Property>) {
    let page = &listing.page;
    println!(
        "{} listing(s) matched{} | page {}/{}",
        page.total,
        if listing.filtered { "" } else { " (no filters)" },
        page.page,
        page.total_pages.max(1)
    );
    for property in &page.items {
        println!(
            "- [{}] {} | {} | {} | {} SAR | {} m2 | {} bd",
            property.id,
            property.title,
            property.category.map_or("-", PropertyCategory::label),
            property.city.as_deref().unwrap_or("-"),
            group_digits(property.price),
            property.area,
            property
                .bedrooms
                .map_or_else(|| "-".to_string(), |rooms| rooms.to_string())
        );
    }
}

fn render_projection(input: &InvestmentInput, projection: &InvestmentProjection) {
    println!(
        "- {} SAR at {}% for {} year(s)",
        group_digits(input.principal),
        input.annual_roi_percent,
        input.years
    );
    println!(
        "  total return {} SAR | profit {} SAR",
        group_digits(projection.total_return),
        group_digits(projection.profit)
    );
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Built-in catalog used when no snapshot is configured.
pub(crate) fn demo_snapshot() -> CatalogSnapshot {
    let project = |id: &str,
                   name: &str,
                   city: &str,
                   project_type: &str,
                   status: ProjectStatus,
                   price_from: u64| Project {
        id: id.to_string(),
        name: name.to_string(),
        developer: None,
        project_type: Some(project_type.to_string()),
        status: Some(status),
        city: Some(city.to_string()),
        district: None,
        price_from: Some(price_from),
        price_to: None,
        completion_percentage: if status == ProjectStatus::Ready { 100 } else { 10 },
        total_units: 0,
        available_units: 0,
        roi_percentage: None,
        is_investment: false,
        is_featured: false,
    };

    let mut projects = vec![
        project(
            "proj-1",
            "مشروع النخيل ريزيدنس",
            "الرياض",
            "شقق سكنية",
            ProjectStatus::Ready,
            650_000,
        ),
        project(
            "proj-2",
            "كمباوند الواحة الذهبية",
            "الرياض",
            "فلل",
            ProjectStatus::OffPlan,
            1_200_000,
        ),
        project(
            "proj-3",
            "برج السيف التجاري",
            "جدة",
            "مكاتب تجارية",
            ProjectStatus::Ready,
            850_000,
        ),
        project(
            "proj-4",
            "مجمع الربوة السكني",
            "الدمام",
            "شقق سكنية",
            ProjectStatus::Ready,
            580_000,
        ),
        project(
            "proj-5",
            "فلل الصفوة",
            "الرياض",
            "فلل فاخرة",
            ProjectStatus::OffPlan,
            1_500_000,
        ),
        project(
            "proj-6",
            "أبراج المستقبل",
            "جدة",
            "شقق",
            ProjectStatus::Ready,
            690_000,
        ),
    ];
    projects[2].is_investment = true;
    projects[2].roi_percentage = Some(9.5);
    projects[4].is_featured = true;

    let property = |id: &str,
                    title: &str,
                    category: PropertyCategory,
                    city: &str,
                    price: u64,
                    area: f64,
                    bedrooms: Option<u32>| Property {
        id: id.to_string(),
        title: title.to_string(),
        category: Some(category),
        status: Some(ListingStatus::ForSale),
        city: Some(city.to_string()),
        district: None,
        address: None,
        price,
        area,
        bedrooms,
        bathrooms: bedrooms.map(|rooms| rooms.min(4)),
        is_featured: false,
        created_at: None,
    };

    let mut properties = vec![
        property(
            "prop-1",
            "شقة حديثة في حي الملقا",
            PropertyCategory::Apartment,
            "الرياض",
            780_000,
            150.0,
            Some(3),
        ),
        property(
            "prop-2",
            "فيلا دوبلكس بحديقة خاصة",
            PropertyCategory::Villa,
            "الرياض",
            1_950_000,
            400.0,
            Some(5),
        ),
        property(
            "prop-3",
            "أرض تجارية على طريق المدينة",
            PropertyCategory::Land,
            "جدة",
            3_200_000,
            1_200.0,
            None,
        ),
        property(
            "prop-4",
            "فيلا عائلية قريبة من الواجهة البحرية",
            PropertyCategory::Villa,
            "الدمام",
            1_400_000,
            360.0,
            Some(6),
        ),
        property(
            "prop-5",
            "شقة للإيجار السنوي",
            PropertyCategory::Apartment,
            "جدة",
            55_000,
            110.0,
            Some(2),
        ),
    ];
    properties[1].is_featured = true;
    properties[1].district = Some("حطين".to_string());
    properties[4].status = Some(ListingStatus::ForRent);

    let unit = |id: &str, number: &str, bedrooms: u32, price: u64, status: UnitStatus| Unit {
        id: id.to_string(),
        project_id: "proj-6".to_string(),
        project_name: Some("أبراج المستقبل".to_string()),
        unit_number: number.to_string(),
        unit_type: Some("شقة".to_string()),
        floor_number: None,
        area: 110.0 + f64::from(bedrooms) * 25.0,
        bedrooms: Some(bedrooms),
        bathrooms: Some(2),
        price,
        status: Some(status),
        sale_type: Some(ListingStatus::ForSale),
        expected_delivery: None,
    };

    let lead = |id: &str,
                customer: &str,
                project: &str,
                status: LeadStatus,
                priority: LeadPriority| Lead {
        id: id.to_string(),
        customer_name: Some(customer.to_string()),
        project_name: Some(project.to_string()),
        status: Some(status),
        priority: Some(priority),
        estimated_value: None,
        created_at: None,
    };

    let city = |id: &str, name: &str, name_en: &str| City {
        id: id.to_string(),
        name: name.to_string(),
        name_en: Some(name_en.to_string()),
        is_active: true,
    };

    CatalogSnapshot {
        properties,
        projects,
        units: vec![
            unit("unit-1", "A-101", 2, 690_000, UnitStatus::Available),
            unit("unit-2", "A-204", 3, 760_000, UnitStatus::Reserved),
            unit("unit-3", "B-310", 4, 910_000, UnitStatus::Sold),
        ],
        leads: vec![
            lead(
                "lead-1",
                "عبدالله الغامدي",
                "أبراج المستقبل",
                LeadStatus::New,
                LeadPriority::High,
            ),
            lead(
                "lead-2",
                "ريم العتيبي",
                "فلل الصفوة",
                LeadStatus::Negotiation,
                LeadPriority::Urgent,
            ),
            lead(
                "lead-3",
                "ماجد الحربي",
                "مشروع النخيل ريزيدنس",
                LeadStatus::Contacted,
                LeadPriority::Medium,
            ),
            lead(
                "lead-4",
                "هند القحطاني",
                "أبراج المستقبل",
                LeadStatus::Won,
                LeadPriority::Low,
            ),
        ],
        cities: vec![
            city("riyadh", "الرياض", "Riyadh"),
            city("jeddah", "جدة", "Jeddah"),
            city("dammam", "الدمام", "Dammam"),
        ],
        ..CatalogSnapshot::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqar_catalog::catalog::filter;

    #[test]
    fn group_digits_inserts_thousands_separators() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(950), "950");
        assert_eq!(group_digits(805_255), "805,255");
        assert_eq!(group_digits(1_200_000), "1,200,000");
    }

    #[test]
    fn demo_city_tabs_partition_the_projects() {
        let snapshot = demo_snapshot();
        let mut per_city = 0;

        for tab in &CITY_TABS[1..] {
            let criteria = ProjectCriteria {
                city: Exact::Is(tab.to_string()),
                ..ProjectCriteria::default()
            };
            per_city += filter(&snapshot.projects, &criteria).len();
        }

        let all = ProjectCriteria::try_from(ProjectQuery {
            city: Some(CITY_TABS[0].to_string()),
            ..ProjectQuery::default()
        })
        .expect("all tab parses");
        assert!(all.city.is_any());
        assert_eq!(per_city, snapshot.projects.len());
    }

    #[test]
    fn demo_runs_against_built_in_catalog() {
        run_demo(DemoArgs::default()).expect("demo completes");
    }

    #[test]
    fn search_rejects_unknown_category() {
        let args = SearchArgs {
            category: Some("castle".to_string()),
            ..SearchArgs::default()
        };

        assert!(matches!(run_search(args), Err(AppError::Criteria(_))));
    }

    #[test]
    fn invest_rejects_out_of_range_principal() {
        let args = InvestArgs {
            principal: 10_000,
            roi: 10.0,
            years: 5,
            json: false,
        };

        assert!(matches!(run_invest(args), Err(AppError::Investment(_))));
    }

    #[test]
    fn json_output_renders_for_search_and_invest() {
        let search = SearchArgs {
            min_price: Some(600_000),
            json: true,
            ..SearchArgs::default()
        };
        run_search(search).expect("search renders as json");

        let invest = InvestArgs {
            principal: 1_000_000,
            roi: 12.0,
            years: 1,
            json: true,
        };
        run_invest(invest).expect("projection renders as json");
    }
}
