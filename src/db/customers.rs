use crate::libs::error::{LedgerResult, StoreResultExt};
use crate::libs::messages::Message;
use rusqlite::{params, Connection, Row};

const INSERT_CUSTOMER: &str = "INSERT INTO customers (name) VALUES (?1) ON CONFLICT(name) DO NOTHING";
const SELECT_CUSTOMER_BY_NAME: &str = "SELECT id, name, active FROM customers WHERE name = ?1";
const SELECT_ALL_CUSTOMERS: &str = "SELECT id, name, active FROM customers ORDER BY name";

/// A client that owns projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

fn customer_from_row(row: &Row) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        active: row.get(2)?,
    })
}

pub struct Customers<'a> {
    conn: &'a Connection,
}

impl<'a> Customers<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get_or_create(&self, name: &str) -> LedgerResult<Customer> {
        self.conn
            .execute(INSERT_CUSTOMER, params![name])
            .store_op(|| Message::GetCreateCustomerFailed(name.to_string()))?;

        self.conn
            .query_row(SELECT_CUSTOMER_BY_NAME, params![name], customer_from_row)
            .store_op(|| Message::GetCreateCustomerFailed(name.to_string()))
    }

    pub fn list(&self) -> LedgerResult<Vec<Customer>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_CUSTOMERS).store_op(|| Message::ListEntitiesFailed)?;
        let rows = stmt
            .query_map([], customer_from_row)
            .store_op(|| Message::ListEntitiesFailed)?;

        let mut customers = Vec::new();
        for customer in rows {
            customers.push(customer.store_op(|| Message::ListEntitiesFailed)?);
        }
        Ok(customers)
    }
}
