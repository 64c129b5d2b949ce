//! Projects, each scoped to exactly one customer.
//!
//! The natural key is `(name, customer_id)`: two customers may both have a
//! project called "Support" and they are different projects.

use crate::libs::error::{LedgerResult, StoreResultExt};
use crate::libs::messages::Message;
use rusqlite::{params, Connection, Row};

const INSERT_PROJECT: &str = "INSERT INTO projects (name, customer_id) VALUES (?1, ?2) ON CONFLICT(name, customer_id) DO NOTHING";
const SELECT_PROJECT_BY_KEY: &str = "SELECT id, name, customer_id, active FROM projects WHERE name = ?1 AND customer_id = ?2";
const SELECT_ALL_PROJECTS: &str = "
    SELECT p.id, p.name, p.customer_id, p.active, c.name
    FROM projects p
    JOIN customers c ON c.id = p.customer_id
    ORDER BY p.name, c.name
";

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub customer_id: i64,
    pub active: bool,
}

/// A project together with the name of the customer that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListing {
    pub project: Project,
    pub customer: String,
}

fn project_from_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        customer_id: row.get(2)?,
        active: row.get(3)?,
    })
}

pub struct Projects<'a> {
    conn: &'a Connection,
}

impl<'a> Projects<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get_or_create(&self, name: &str, customer_id: i64) -> LedgerResult<Project> {
        let op = || Message::GetCreateProjectFailed(name.to_string());

        self.conn.execute(INSERT_PROJECT, params![name, customer_id]).store_op(op)?;
        self.conn
            .query_row(SELECT_PROJECT_BY_KEY, params![name, customer_id], project_from_row)
            .store_op(op)
    }

    pub fn list(&self) -> LedgerResult<Vec<ProjectListing>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_PROJECTS).store_op(|| Message::ListEntitiesFailed)?;
        let projects = stmt
            .query_map([], |row| {
                Ok(ProjectListing {
                    project: project_from_row(row)?,
                    customer: row.get(4)?,
                })
            })
            .store_op(|| Message::ListEntitiesFailed)?
            .collect::<Result<Vec<_>, _>>()
            .store_op(|| Message::ListEntitiesFailed)?;

        Ok(projects)
    }
}
