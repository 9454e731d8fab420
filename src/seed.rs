//! `seed` command: replaces every table's contents with a fixed sample
//! portfolio inside one transaction.

use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{
    ActiveValue::NotSet, DatabaseConnection, DatabaseTransaction, EntityTrait, Set,
    TransactionTrait,
};
use serde_json::json;
use tracing::info;

use crate::modules::award::adapter::outgoing::sea_orm_entity as awards;
use crate::modules::education::adapter::outgoing::sea_orm_entity as education;
use crate::modules::experience::adapter::outgoing::sea_orm_entity as experiences;
use crate::modules::message::adapter::outgoing::sea_orm_entity as messages;
use crate::modules::profile::adapter::outgoing::sea_orm_entity as profile;
use crate::modules::project::adapter::outgoing::sea_orm_entity as projects;
use crate::modules::skill::adapter::outgoing::sea_orm_entity as skills;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub profile: usize,
    pub education: usize,
    pub experiences: usize,
    pub projects: usize,
    pub skills: usize,
    pub awards: usize,
}

pub async fn run(db: &DatabaseConnection) -> Result<SeedSummary> {
    let txn = db.begin().await.context("Failed to open seed transaction")?;

    clear(&txn).await?;

    let summary = SeedSummary {
        profile: insert_profile(&txn).await?,
        education: insert_education(&txn).await?,
        experiences: insert_experiences(&txn).await?,
        projects: insert_projects(&txn).await?,
        skills: insert_skills(&txn).await?,
        awards: insert_awards(&txn).await?,
    };

    txn.commit().await.context("Failed to commit seed data")?;

    info!(?summary, "Seeding completed");
    Ok(summary)
}

async fn clear(txn: &DatabaseTransaction) -> Result<()> {
    info!("Cleaning old data");

    profile::Entity::delete_many().exec(txn).await?;
    experiences::Entity::delete_many().exec(txn).await?;
    projects::Entity::delete_many().exec(txn).await?;
    education::Entity::delete_many().exec(txn).await?;
    skills::Entity::delete_many().exec(txn).await?;
    awards::Entity::delete_many().exec(txn).await?;
    messages::Entity::delete_many().exec(txn).await?;

    Ok(())
}

async fn insert_profile(txn: &DatabaseTransaction) -> Result<usize> {
    info!("Seeding profile");

    let row = profile::ActiveModel {
        id: NotSet,
        full_name: Set("Alex Morgan".to_string()),
        headline: Set(Some("Backend Engineer | Distributed Systems".to_string())),
        email: Set("alex.morgan@example.com".to_string()),
        phone: Set(Some("+1 555 0100".to_string())),
        location: Set(Some("Lisbon, Portugal".to_string())),
        github_url: Set(Some("https://github.com/alex-morgan".to_string())),
        linkedin_url: Set(None),
        bio: Set(Some(
            "Engineer who enjoys turning messy requirements into small, reliable services. \
             Comfortable across the stack, happiest close to the data."
                .to_string(),
        )),
        avatar_url: Set(None),
        resume_url: Set(None),
        is_available: Set(true),
    };

    profile::Entity::insert(row)
        .exec(txn)
        .await
        .context("Failed to seed profile")?;
    Ok(1)
}

async fn insert_education(txn: &DatabaseTransaction) -> Result<usize> {
    info!("Seeding education");

    let rows = vec![
        education::ActiveModel {
            id: NotSet,
            school: Set("University of Lisbon".to_string()),
            degree: Set(Some("MSc Computer Science".to_string())),
            gpa: Set(Some("GPA: 3.8/4.0".to_string())),
            start_date: Set(Some("Sep 2016".to_string())),
            end_date: Set(Some("Jul 2018".to_string())),
            achievements: Set(Some("Thesis on consensus protocols".to_string())),
        },
        education::ActiveModel {
            id: NotSet,
            school: Set("Porto Polytechnic".to_string()),
            degree: Set(Some("BSc Software Engineering".to_string())),
            gpa: Set(None),
            start_date: Set(Some("2013".to_string())),
            end_date: Set(Some("2016".to_string())),
            achievements: Set(None),
        },
    ];

    let count = rows.len();
    education::Entity::insert_many(rows)
        .exec(txn)
        .await
        .context("Failed to seed education")?;
    Ok(count)
}

async fn insert_experiences(txn: &DatabaseTransaction) -> Result<usize> {
    info!("Seeding experiences");

    let row = |kind: &str,
               role: &str,
               company: &str,
               start: &str,
               end: &str,
               description: &str,
               traits: serde_json::Value,
               order: i32| experiences::ActiveModel {
        id: NotSet,
        kind: Set(kind.to_string()),
        role: Set(role.to_string()),
        company: Set(company.to_string()),
        location: Set(Some("Remote".to_string())),
        start_date: Set(Some(start.to_string())),
        end_date: Set(Some(end.to_string())),
        description: Set(Some(description.to_string())),
        traits: Set(traits),
        sort_order: Set(order),
    };

    let rows = vec![
        row(
            "WORK",
            "Senior Backend Engineer",
            "Northwind Logistics",
            "Mar 2021",
            "Present",
            "- Owned the shipment tracking API.\n- Cut p99 latency by moving hot reads to a cache.",
            json!(["Rust", "PostgreSQL", "Kafka"]),
            1,
        ),
        row(
            "WORK",
            "Software Engineer",
            "Contoso Payments",
            "Aug 2018",
            "Feb 2021",
            "- Built reconciliation jobs for card settlements.",
            json!(["Go", "Docker"]),
            2,
        ),
        row(
            "ACTIVITY",
            "Mentor",
            "Code Club",
            "2019",
            "Present",
            "- Weekly sessions teaching programming basics to teenagers.",
            json!(["Teaching", "Mentoring"]),
            1,
        ),
    ];

    let count = rows.len();
    experiences::Entity::insert_many(rows)
        .exec(txn)
        .await
        .context("Failed to seed experiences")?;
    Ok(count)
}

async fn insert_projects(txn: &DatabaseTransaction) -> Result<usize> {
    info!("Seeding projects");

    let now = Utc::now();
    let row = |title: &str,
               slug: &str,
               brief: &str,
               tech: serde_json::Value,
               repo: &str,
               featured: bool| projects::ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        slug: Set(slug.to_string()),
        brief: Set(Some(brief.to_string())),
        content: Set(Some(format!("### Overview\n{brief}"))),
        tech_stack: Set(tech),
        repo_url: Set(Some(repo.to_string())),
        demo_url: Set(None),
        thumbnail_url: Set(None),
        featured: Set(featured),
        created_at: Set(now),
    };

    let rows = vec![
        row(
            "Market Data Dashboard",
            "market-data-dashboard",
            "Streaming dashboard for retail investors with live quotes.",
            json!(["Rust", "WebSocket", "PostgreSQL"]),
            "https://github.com/alex-morgan/market-dashboard",
            true,
        ),
        row(
            "Trip Planner",
            "trip-planner",
            "Booking site for ferries, hotels and flights.",
            json!(["TypeScript", "React", "Docker"]),
            "https://github.com/alex-morgan/trip-planner",
            true,
        ),
        row(
            "Media Shop",
            "media-shop",
            "E-commerce storefront for physical media with payment integration.",
            json!(["Java", "Spring Boot"]),
            "https://github.com/alex-morgan/media-shop",
            false,
        ),
    ];

    let count = rows.len();
    projects::Entity::insert_many(rows)
        .exec(txn)
        .await
        .context("Failed to seed projects")?;
    Ok(count)
}

async fn insert_skills(txn: &DatabaseTransaction) -> Result<usize> {
    info!("Seeding skills");

    let icon = |name: &str| format!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/{name}/{name}-original.svg");

    let rows = vec![
        skills::ActiveModel {
            id: NotSet,
            category: Set("Languages".to_string()),
            items: Set(json!([
                { "name": "Rust", "icon": icon("rust") },
                { "name": "Go", "icon": icon("go") },
                { "name": "TypeScript", "icon": icon("typescript") },
            ])),
            display_order: Set(1),
        },
        skills::ActiveModel {
            id: NotSet,
            category: Set("Infrastructure".to_string()),
            items: Set(json!([
                { "name": "PostgreSQL", "icon": icon("postgresql") },
                { "name": "Docker", "icon": icon("docker") },
                { "name": "Kafka" },
            ])),
            display_order: Set(2),
        },
    ];

    let count = rows.len();
    skills::Entity::insert_many(rows)
        .exec(txn)
        .await
        .context("Failed to seed skills")?;
    Ok(count)
}

async fn insert_awards(txn: &DatabaseTransaction) -> Result<usize> {
    info!("Seeding awards");

    let row = |title: &str, issuer: Option<&str>, kind: &str, date: Option<&str>| {
        awards::ActiveModel {
            id: NotSet,
            title: Set(title.to_string()),
            issuer: Set(issuer.map(str::to_string)),
            date: Set(date.map(str::to_string)),
            url: Set(None),
            kind: Set(kind.to_string()),
        }
    };

    let rows = vec![
        row("Regional Hackathon, 2nd place", Some("DevFest"), "AWARD", Some("2023")),
        row("Open Source Contributor of the Year", None, "AWARD", Some("2022")),
        row("AWS Solutions Architect Associate", Some("Amazon"), "CERTIFICATE", None),
    ];

    let count = rows.len();
    awards::Entity::insert_many(rows)
        .exec(txn)
        .await
        .context("Failed to seed awards")?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::award::adapter::outgoing::award_repository_sqlite::AwardRepositorySqlite;
    use crate::modules::award::{AwardFilter, AwardKind};
    use crate::modules::content::application::ports::outgoing::content_repository::ContentReader;
    use crate::modules::skill::adapter::outgoing::skill_repository_sqlite::SkillRepositorySqlite;
    use crate::tests::support::db::migrated_sqlite;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_seed_populates_every_table() {
        let db = migrated_sqlite().await;

        let summary = run(&db).await.unwrap();

        assert_eq!(summary.profile, 1);
        assert_eq!(
            projects::Entity::find().count(&*db).await.unwrap() as usize,
            summary.projects
        );
        assert_eq!(
            experiences::Entity::find().count(&*db).await.unwrap() as usize,
            summary.experiences
        );
    }

    #[tokio::test]
    async fn test_seed_is_repeatable_and_clears_messages() {
        let db = migrated_sqlite().await;

        messages::Entity::insert(messages::ActiveModel {
            id: NotSet,
            name: Set("Sam".to_string()),
            email: Set("sam@example.com".to_string()),
            subject: Set(None),
            message: Set("Hi".to_string()),
            is_read: Set(false),
            created_at: Set(Utc::now()),
        })
        .exec(&*db)
        .await
        .unwrap();

        let first = run(&db).await.unwrap();
        let second = run(&db).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(profile::Entity::find().count(&*db).await.unwrap(), 1);
        assert_eq!(messages::Entity::find().count(&*db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seeded_rows_read_back_through_repositories() {
        let db = migrated_sqlite().await;
        run(&db).await.unwrap();

        let certificates = AwardRepositorySqlite::new(db.clone())
            .list(&AwardFilter {
                kind: Some(AwardKind::Certificate),
            })
            .await
            .unwrap();
        assert_eq!(certificates.len(), 1);

        let skills = SkillRepositorySqlite::new(db).list(&()).await.unwrap();
        assert_eq!(skills[0].category, "Languages");
        assert_eq!(skills[1].items[2].icon, None);
    }
}
