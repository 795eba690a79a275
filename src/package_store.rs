use crate::travel_package::TravelPackage;
use log::debug;
use rusqlite::{params, Connection, Row};
use std::path::Path;

pub struct PackageStore {
    conn: Connection,
}

impl PackageStore {
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS packages (
                package_id INTEGER PRIMARY KEY AUTOINCREMENT,
                pkg_name TEXT NOT NULL,
                pkg_desc TEXT NOT NULL DEFAULT '',
                pkg_start_date TEXT,
                pkg_end_date TEXT,
                pkg_base_price REAL NOT NULL,
                pkg_agency_commission REAL
            )",
            [],
        )?;
        Ok(())
    }

    fn package_from_row(row: &Row<'_>) -> Result<TravelPackage, rusqlite::Error> {
        Ok(TravelPackage {
            package_id: Some(row.get(0)?),
            pkg_name: row.get(1)?,
            pkg_desc: row.get(2)?,
            pkg_start_date: row.get(3)?,
            pkg_end_date: row.get(4)?,
            pkg_base_price: row.get(5)?,
            pkg_agency_commission: row.get(6)?,
        })
    }

    pub fn list_packages(&self) -> Result<Vec<TravelPackage>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT package_id, pkg_name, pkg_desc, pkg_start_date, pkg_end_date,
                    pkg_base_price, pkg_agency_commission
             FROM packages ORDER BY package_id ASC",
        )?;
        let rows = stmt.query_map([], Self::package_from_row)?;
        rows.collect()
    }

    /// Inserts a package without an id, otherwise updates it in place.
    /// Returns the stored package, including its assigned id.
    pub fn save_package(&self, package: &TravelPackage) -> Result<TravelPackage, rusqlite::Error> {
        match package.package_id {
            None => {
                self.conn.execute(
                    "INSERT INTO packages (pkg_name, pkg_desc, pkg_start_date, pkg_end_date,
                        pkg_base_price, pkg_agency_commission)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        package.pkg_name,
                        package.pkg_desc,
                        package.pkg_start_date,
                        package.pkg_end_date,
                        package.pkg_base_price,
                        package.pkg_agency_commission,
                    ],
                )?;
                let package_id: i32 =
                    self.conn
                        .query_row("SELECT last_insert_rowid()", [], |row| row.get(0))?;
                debug!("Inserted package {}", package_id);
                Ok(TravelPackage {
                    package_id: Some(package_id),
                    ..package.clone()
                })
            }
            Some(package_id) => {
                let updated = self.conn.execute(
                    "UPDATE packages SET pkg_name = ?1, pkg_desc = ?2, pkg_start_date = ?3,
                        pkg_end_date = ?4, pkg_base_price = ?5, pkg_agency_commission = ?6
                     WHERE package_id = ?7",
                    params![
                        package.pkg_name,
                        package.pkg_desc,
                        package.pkg_start_date,
                        package.pkg_end_date,
                        package.pkg_base_price,
                        package.pkg_agency_commission,
                        package_id,
                    ],
                )?;
                if updated == 0 {
                    return Err(rusqlite::Error::QueryReturnedNoRows);
                }
                debug!("Updated package {}", package_id);
                Ok(package.clone())
            }
        }
    }
}
