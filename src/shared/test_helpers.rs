//! In-memory repositories and fixtures shared by the service and HTTP tests.
//!
//! `MemoryStore` implements every repository trait over one set of tables so
//! foreign keys, cascades and unique constraints behave like the PostgreSQL
//! schema does.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;

use crate::app::{api_router, AppServices, Repositories};
use crate::core::config::PasswordConfig;
use crate::core::error::{AppError, Result};
use crate::features::applications::models::{
    Application, ApplicationFilter, ApplicationPatch, ApplicationStatus,
    ApplicationWithOpportunity, ApplicationWithVolunteer, NewApplication, VolunteerStatistics,
};
use crate::features::applications::repositories::ApplicationRepository;
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::opportunities::dtos::CreateOpportunityDto;
use crate::features::opportunities::models::{
    NewOpportunity, Opportunity, OpportunityPatch, OpportunityWithApplicationCount,
    OpportunityWithOrganization,
};
use crate::features::opportunities::repositories::OpportunityRepository;
use crate::features::organizations::dtos::CreateOrganizationDto;
use crate::features::organizations::models::{NewOrganization, Organization, OrganizationPatch};
use crate::features::organizations::repositories::OrganizationRepository;
use crate::features::users::models::{NewUser, User, UserPatch};
use crate::features::users::repositories::UserRepository;
use crate::features::volunteers::dtos::CreateVolunteerDto;
use crate::features::volunteers::models::{NewVolunteer, Volunteer, VolunteerPatch};
use crate::features::volunteers::repositories::VolunteerRepository;
use crate::shared::password::CredentialHasher;

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_sequence() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Cheap Argon2 parameters so the tests stay fast
pub fn test_hasher() -> CredentialHasher {
    CredentialHasher::new(&PasswordConfig {
        memory_kib: 256,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid test argon2 parameters")
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub fn sample_volunteer(email: &str) -> CreateVolunteerDto {
    CreateVolunteerDto {
        email: email.to_string(),
        password: "password123".to_string(),
        name: Name().fake(),
        phone: format!("555{:07}", next_sequence()),
        location: "Denver".to_string(),
        bio: "Happy to help on weekends".to_string(),
        categories: vec!["Teaching".to_string()],
        available_hours: 10,
    }
}

pub fn sample_organization(email: &str) -> CreateOrganizationDto {
    let company: String = CompanyName().fake();
    CreateOrganizationDto {
        email: email.to_string(),
        password: "password123".to_string(),
        name: format!("{} {}", company, next_sequence()),
        phone: "+1 555-010-2030".to_string(),
        location: "Denver".to_string(),
        description: "Community food bank".to_string(),
        website_url: "https://example.org".to_string(),
    }
}

pub fn sample_opportunity(organization_mail: &str) -> CreateOpportunityDto {
    CreateOpportunityDto {
        organization_mail: organization_mail.to_string(),
        category: "Teaching".to_string(),
        title: "Weekend tutor".to_string(),
        description: "Help students with math homework".to_string(),
        location: "Denver".to_string(),
        hours_required: 5,
        start_date: None,
        end_date: None,
    }
}

/// Full API router over a memory store
pub fn test_server(store: Arc<MemoryStore>) -> TestServer {
    let repositories = Repositories {
        users: store.clone(),
        volunteers: store.clone(),
        organizations: store.clone(),
        categories: store.clone(),
        opportunities: store.clone(),
        applications: store,
    };
    let services = AppServices::new(repositories, test_hasher());
    TestServer::new(api_router(&services)).expect("test server")
}

fn duplicate(constraint: &str) -> AppError {
    AppError::Conflict(format!("Duplicate value violates '{}'", constraint))
}

fn missing_reference() -> AppError {
    AppError::BadRequest("Referenced record does not exist".to_string())
}

#[derive(Default)]
struct Tables {
    last_id: i64,
    users: Vec<User>,
    volunteers: Vec<Volunteer>,
    organizations: Vec<Organization>,
    categories: Vec<Category>,
    opportunities: Vec<Opportunity>,
    applications: Vec<Application>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn remove_volunteer(&mut self, email: &str) -> bool {
        let Some(id) = self.volunteers.iter().find(|v| v.email == email).map(|v| v.id) else {
            return false;
        };
        self.volunteers.retain(|v| v.id != id);
        self.applications.retain(|a| a.volunteer_id != id);
        true
    }

    fn remove_opportunity(&mut self, id: i64) -> bool {
        let before = self.opportunities.len();
        self.opportunities.retain(|o| o.id != id);
        self.applications.retain(|a| a.opportunity_id != id);
        self.opportunities.len() != before
    }

    fn remove_organization(&mut self, email: &str) -> bool {
        let before = self.organizations.len();
        self.organizations.retain(|o| o.email != email);
        if self.organizations.len() == before {
            return false;
        }

        let owned: Vec<i64> = self
            .opportunities
            .iter()
            .filter(|o| o.organization_mail == email)
            .map(|o| o.id)
            .collect();
        for id in owned {
            self.remove_opportunity(id);
        }
        true
    }

    fn insert_organization(&mut self, organization: NewOrganization) -> Result<Organization> {
        if self.organizations.iter().any(|o| o.email == organization.email) {
            return Err(duplicate("organizations_email_key"));
        }
        if self.organizations.iter().any(|o| o.name == organization.name) {
            return Err(duplicate("organizations_name_key"));
        }

        let now = Utc::now();
        let row = Organization {
            id: self.next_id(),
            email: organization.email,
            password: organization.password_hash,
            name: organization.name,
            phone: organization.phone,
            location: organization.location,
            description: organization.description,
            website_url: organization.website_url,
            created_at: now,
            updated_at: now,
        };
        self.organizations.push(row.clone());
        Ok(row)
    }

    fn insert_volunteer(&mut self, volunteer: NewVolunteer) -> Result<Volunteer> {
        if self.volunteers.iter().any(|v| v.email == volunteer.email) {
            return Err(duplicate("volunteers_email_key"));
        }
        if self.volunteers.iter().any(|v| v.phone == volunteer.phone) {
            return Err(duplicate("volunteers_phone_key"));
        }

        let now = Utc::now();
        let row = Volunteer {
            id: self.next_id(),
            email: volunteer.email,
            password: volunteer.password_hash,
            name: volunteer.name,
            phone: volunteer.phone,
            location: volunteer.location,
            bio: volunteer.bio,
            categories: volunteer.categories,
            available_hours: volunteer.available_hours,
            created_at: now,
            updated_at: now,
        };
        self.volunteers.push(row.clone());
        Ok(row)
    }

    fn insert_opportunity(&mut self, opportunity: NewOpportunity) -> Result<Opportunity> {
        if !self
            .organizations
            .iter()
            .any(|o| o.email == opportunity.organization_mail)
        {
            return Err(missing_reference());
        }

        let now = Utc::now();
        let row = Opportunity {
            id: self.next_id(),
            organization_mail: opportunity.organization_mail,
            category: opportunity.category,
            title: opportunity.title,
            description: opportunity.description,
            location: opportunity.location,
            hours_required: opportunity.hours_required,
            start_date: opportunity.start_date,
            end_date: opportunity.end_date,
            created_at: now,
            updated_at: now,
        };
        self.opportunities.push(row.clone());
        Ok(row)
    }

    fn insert_application(&mut self, application: NewApplication) -> Result<Application> {
        let volunteer_exists = self
            .volunteers
            .iter()
            .any(|v| v.id == application.volunteer_id);
        let opportunity_exists = self
            .opportunities
            .iter()
            .any(|o| o.id == application.opportunity_id);
        if !volunteer_exists || !opportunity_exists {
            return Err(missing_reference());
        }

        let now = Utc::now();
        let row = Application {
            id: self.next_id(),
            volunteer_id: application.volunteer_id,
            opportunity_id: application.opportunity_id,
            status: application.status,
            cover_letter: application.cover_letter,
            created_at: now,
            updated_at: now,
        };
        self.applications.push(row.clone());
        Ok(row)
    }

    fn insert_category(&mut self, name: &str) -> Option<Category> {
        if self.categories.iter().any(|c| c.name == name) {
            return None;
        }

        let row = Category {
            id: self.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.categories.push(row.clone());
        Some(row)
    }
}

/// Shared in-memory backing for every repository trait
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn user(&self, email: &str) -> Option<User> {
        self.lock().users.iter().find(|u| u.email == email).cloned()
    }

    pub fn volunteer(&self, email: &str) -> Option<Volunteer> {
        self.lock().volunteers.iter().find(|v| v.email == email).cloned()
    }

    pub fn organization(&self, email: &str) -> Option<Organization> {
        self.lock()
            .organizations
            .iter()
            .find(|o| o.email == email)
            .cloned()
    }

    pub fn category(&self, name: &str) -> Option<Category> {
        self.lock().categories.iter().find(|c| c.name == name).cloned()
    }

    pub fn insert_category(&self, name: &str) -> Option<Category> {
        self.lock().insert_category(name)
    }

    pub fn seed_organization(&self, email: &str, name: &str) -> Organization {
        self.lock()
            .insert_organization(NewOrganization {
                email: email.to_string(),
                password_hash: "not-a-real-hash".to_string(),
                name: name.to_string(),
                phone: "5550102030".to_string(),
                location: "Denver".to_string(),
                description: String::new(),
                website_url: "https://example.org".to_string(),
            })
            .unwrap()
    }

    pub fn seed_volunteer(&self, email: &str) -> Volunteer {
        let dto = sample_volunteer(email);
        self.lock()
            .insert_volunteer(NewVolunteer {
                email: dto.email,
                password_hash: "not-a-real-hash".to_string(),
                name: dto.name,
                phone: dto.phone,
                location: dto.location,
                bio: dto.bio,
                categories: dto.categories,
                available_hours: dto.available_hours,
            })
            .unwrap()
    }

    pub fn seed_opportunity(
        &self,
        organization_mail: &str,
        hours_required: i32,
        end_date: Option<DateTime<Utc>>,
    ) -> Opportunity {
        let dto = sample_opportunity(organization_mail);
        self.lock()
            .insert_opportunity(NewOpportunity {
                organization_mail: dto.organization_mail,
                category: dto.category,
                title: dto.title,
                description: dto.description,
                location: dto.location,
                hours_required,
                start_date: None,
                end_date,
            })
            .unwrap()
    }

    pub fn seed_application(
        &self,
        volunteer_id: i64,
        opportunity_id: i64,
        status: ApplicationStatus,
    ) -> Application {
        self.lock()
            .insert_application(NewApplication {
                volunteer_id,
                opportunity_id,
                status,
                cover_letter: String::new(),
            })
            .unwrap()
    }

    pub fn remove_volunteer(&self, email: &str) -> bool {
        self.lock().remove_volunteer(email)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut tables = self.lock();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(duplicate("users_email_key"));
        }

        let now = Utc::now();
        let row = User {
            id: tables.next_id(),
            email: user.email,
            password: user.password_hash,
            full_name: user.full_name,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(row.clone());
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.user(email))
    }

    async fn update(&self, email: &str, patch: UserPatch) -> Result<Option<User>> {
        let mut tables = self.lock();
        let Some(user) = tables.users.iter_mut().find(|u| u.email == email) else {
            return Ok(None);
        };

        if let Some(hash) = patch.password_hash {
            user.password = hash;
        }
        if let Some(full_name) = patch.full_name {
            user.full_name = full_name;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, email: &str) -> Result<bool> {
        let mut tables = self.lock();
        let before = tables.users.len();
        tables.users.retain(|u| u.email != email);
        Ok(tables.users.len() != before)
    }
}

#[async_trait]
impl VolunteerRepository for MemoryStore {
    async fn insert(&self, volunteer: NewVolunteer) -> Result<Volunteer> {
        self.lock().insert_volunteer(volunteer)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Volunteer>> {
        Ok(self.volunteer(email))
    }

    async fn update(&self, email: &str, patch: VolunteerPatch) -> Result<Option<Volunteer>> {
        let mut tables = self.lock();
        if let Some(phone) = &patch.phone {
            if tables
                .volunteers
                .iter()
                .any(|v| &v.phone == phone && v.email != email)
            {
                return Err(duplicate("volunteers_phone_key"));
            }
        }

        let Some(volunteer) = tables.volunteers.iter_mut().find(|v| v.email == email) else {
            return Ok(None);
        };

        if let Some(hash) = patch.password_hash {
            volunteer.password = hash;
        }
        if let Some(name) = patch.name {
            volunteer.name = name;
        }
        if let Some(phone) = patch.phone {
            volunteer.phone = phone;
        }
        if let Some(location) = patch.location {
            volunteer.location = location;
        }
        if let Some(bio) = patch.bio {
            volunteer.bio = bio;
        }
        if let Some(categories) = patch.categories {
            volunteer.categories = categories;
        }
        if let Some(hours) = patch.available_hours {
            volunteer.available_hours = hours;
        }
        volunteer.updated_at = Utc::now();
        Ok(Some(volunteer.clone()))
    }

    async fn delete(&self, email: &str) -> Result<bool> {
        Ok(self.lock().remove_volunteer(email))
    }
}

#[async_trait]
impl OrganizationRepository for MemoryStore {
    async fn insert(&self, organization: NewOrganization) -> Result<Organization> {
        self.lock().insert_organization(organization)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Organization>> {
        Ok(self.organization(email))
    }

    async fn update(
        &self,
        email: &str,
        patch: OrganizationPatch,
    ) -> Result<Option<Organization>> {
        let mut tables = self.lock();
        if let Some(name) = &patch.name {
            if tables
                .organizations
                .iter()
                .any(|o| &o.name == name && o.email != email)
            {
                return Err(duplicate("organizations_name_key"));
            }
        }

        let Some(organization) = tables.organizations.iter_mut().find(|o| o.email == email)
        else {
            return Ok(None);
        };

        if let Some(hash) = patch.password_hash {
            organization.password = hash;
        }
        if let Some(name) = patch.name {
            organization.name = name;
        }
        if let Some(phone) = patch.phone {
            organization.phone = phone;
        }
        if let Some(location) = patch.location {
            organization.location = location;
        }
        if let Some(description) = patch.description {
            organization.description = description;
        }
        if let Some(website_url) = patch.website_url {
            organization.website_url = website_url;
        }
        organization.updated_at = Utc::now();
        Ok(Some(organization.clone()))
    }

    async fn delete(&self, email: &str) -> Result<bool> {
        Ok(self.lock().remove_organization(email))
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn insert_missing(&self, names: &[String]) -> Result<u64> {
        let mut tables = self.lock();
        let inserted = names
            .iter()
            .filter_map(|name| tables.insert_category(name))
            .count();
        Ok(inserted as u64)
    }

    async fn list(&self) -> Result<Vec<Category>> {
        let mut categories = self.lock().categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }
}

#[async_trait]
impl OpportunityRepository for MemoryStore {
    async fn insert(&self, opportunity: NewOpportunity) -> Result<Opportunity> {
        self.lock().insert_opportunity(opportunity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Opportunity>> {
        Ok(self
            .lock()
            .opportunities
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn update(&self, id: i64, patch: OpportunityPatch) -> Result<Option<Opportunity>> {
        let mut tables = self.lock();
        let Some(opportunity) = tables.opportunities.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };

        if let Some(category) = patch.category {
            opportunity.category = category;
        }
        if let Some(title) = patch.title {
            opportunity.title = title;
        }
        if let Some(description) = patch.description {
            opportunity.description = description;
        }
        if let Some(location) = patch.location {
            opportunity.location = location;
        }
        if let Some(hours) = patch.hours_required {
            opportunity.hours_required = hours;
        }
        if patch.start_date.is_some() {
            opportunity.start_date = patch.start_date;
        }
        if patch.end_date.is_some() {
            opportunity.end_date = patch.end_date;
        }
        opportunity.updated_at = Utc::now();
        Ok(Some(opportunity.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.lock().remove_opportunity(id))
    }

    async fn list_available(&self, now: DateTime<Utc>) -> Result<Vec<OpportunityWithOrganization>> {
        let tables = self.lock();
        let mut rows: Vec<OpportunityWithOrganization> = tables
            .opportunities
            .iter()
            .filter(|o| o.is_available_at(now))
            .filter_map(|o| {
                let organization = tables
                    .organizations
                    .iter()
                    .find(|org| org.email == o.organization_mail)?;
                Some(OpportunityWithOrganization {
                    opportunity: o.clone(),
                    organization_name: organization.name.clone(),
                })
            })
            .collect();

        rows.sort_by_key(|r| {
            (
                r.opportunity.start_date.is_none(),
                r.opportunity.start_date,
                r.opportunity.id,
            )
        });
        Ok(rows)
    }

    async fn last_expired_for_organization(
        &self,
        organization_mail: &str,
        limit: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Opportunity>> {
        let mut rows: Vec<Opportunity> = self
            .lock()
            .opportunities
            .iter()
            .filter(|o| o.organization_mail == organization_mail && o.is_expired_at(now))
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.end_date.cmp(&a.end_date).then(b.id.cmp(&a.id)));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn list_with_application_counts(
        &self,
        organization_mail: &str,
    ) -> Result<Vec<OpportunityWithApplicationCount>> {
        let tables = self.lock();
        let mut rows: Vec<OpportunityWithApplicationCount> = tables
            .opportunities
            .iter()
            .filter(|o| o.organization_mail == organization_mail)
            .map(|o| OpportunityWithApplicationCount {
                opportunity: o.clone(),
                application_count: tables
                    .applications
                    .iter()
                    .filter(|a| a.opportunity_id == o.id)
                    .count() as i64,
            })
            .collect();

        rows.sort_by_key(|r| r.opportunity.id);
        Ok(rows)
    }

    async fn last_completed_for_volunteer(
        &self,
        volunteer_id: i64,
        limit: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Opportunity>> {
        let tables = self.lock();
        let mut rows: Vec<Opportunity> = tables
            .opportunities
            .iter()
            .filter(|o| o.is_expired_at(now))
            .filter(|o| {
                tables.applications.iter().any(|a| {
                    a.opportunity_id == o.id
                        && a.volunteer_id == volunteer_id
                        && a.status == ApplicationStatus::Accepted
                })
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.end_date.cmp(&a.end_date).then(b.id.cmp(&a.id)));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn insert(&self, application: NewApplication) -> Result<Application> {
        self.lock().insert_application(application)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Application>> {
        Ok(self
            .lock()
            .applications
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn update(&self, id: i64, patch: ApplicationPatch) -> Result<Option<Application>> {
        let mut tables = self.lock();
        let Some(application) = tables.applications.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        if let Some(status) = patch.status {
            application.status = status;
        }
        if let Some(cover_letter) = patch.cover_letter {
            application.cover_letter = cover_letter;
        }
        application.updated_at = Utc::now();
        Ok(Some(application.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tables = self.lock();
        let before = tables.applications.len();
        tables.applications.retain(|a| a.id != id);
        Ok(tables.applications.len() != before)
    }

    async fn list(&self, filter: ApplicationFilter) -> Result<Vec<Application>> {
        let mut rows: Vec<Application> = self
            .lock()
            .applications
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();

        rows.sort_by_key(|a| a.id);
        Ok(rows)
    }

    async fn list_by_volunteer_with_details(
        &self,
        volunteer_id: i64,
    ) -> Result<Vec<ApplicationWithOpportunity>> {
        let tables = self.lock();
        let mut rows: Vec<ApplicationWithOpportunity> = tables
            .applications
            .iter()
            .filter(|a| a.volunteer_id == volunteer_id)
            .filter_map(|a| {
                let opportunity = tables
                    .opportunities
                    .iter()
                    .find(|o| o.id == a.opportunity_id)?;
                let organization = tables
                    .organizations
                    .iter()
                    .find(|org| org.email == opportunity.organization_mail)?;
                Some(ApplicationWithOpportunity {
                    application: a.clone(),
                    opportunity_title: opportunity.title.clone(),
                    organization_name: organization.name.clone(),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.application
                .created_at
                .cmp(&a.application.created_at)
                .then(b.application.id.cmp(&a.application.id))
        });
        Ok(rows)
    }

    async fn list_by_opportunity_with_volunteer(
        &self,
        opportunity_id: i64,
    ) -> Result<Vec<ApplicationWithVolunteer>> {
        let tables = self.lock();
        let mut rows: Vec<ApplicationWithVolunteer> = tables
            .applications
            .iter()
            .filter(|a| a.opportunity_id == opportunity_id)
            .filter_map(|a| {
                let volunteer = tables.volunteers.iter().find(|v| v.id == a.volunteer_id)?;
                Some(ApplicationWithVolunteer {
                    application: a.clone(),
                    volunteer_name: volunteer.name.clone(),
                    volunteer_email: volunteer.email.clone(),
                })
            })
            .collect();

        rows.sort_by_key(|r| r.application.id);
        Ok(rows)
    }

    async fn last_approved_for_volunteer(
        &self,
        volunteer_id: i64,
        limit: i64,
    ) -> Result<Vec<Application>> {
        let mut rows: Vec<Application> = self
            .lock()
            .applications
            .iter()
            .filter(|a| a.volunteer_id == volunteer_id && a.status == ApplicationStatus::Accepted)
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn volunteer_statistics(&self, volunteer_id: i64) -> Result<VolunteerStatistics> {
        let tables = self.lock();
        let hours: Vec<i64> = tables
            .applications
            .iter()
            .filter(|a| a.volunteer_id == volunteer_id && a.status == ApplicationStatus::Accepted)
            .filter_map(|a| {
                tables
                    .opportunities
                    .iter()
                    .find(|o| o.id == a.opportunity_id)
                    .map(|o| i64::from(o.hours_required))
            })
            .collect();

        Ok(VolunteerStatistics {
            total_jobs: hours.len() as i64,
            total_hours_worked: hours.iter().sum(),
        })
    }
}
