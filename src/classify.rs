//! Statement classification for cache invalidation.
//!
//! Maps a raw SQL string to the side effects its execution implies, so
//! the host knows whether to refresh its schema tree or table data after
//! running it. Deliberately coarse: a leading-keyword plus `EXEC`
//! substring heuristic, not a parser.

const SCHEMA_PREFIXES: [&str; 5] = ["ALTER", "ATTACH", "CREATE", "DETACH", "DROP"];

const DATA_PREFIXES: [&str; 7] = [
    "ALTER", "DELETE", "DETACH", "DROP", "INSERT", "REPLACE", "UPDATE",
];

fn classify(sql: &str, prefixes: &[&str]) -> bool {
    let upper = sql.trim().to_uppercase();
    if upper.is_empty() {
        return false;
    }
    prefixes.iter().any(|p| upper.starts_with(p)) || upper.contains("EXEC")
}

/// True if executing `sql` may change the database schema, meaning any
/// cached object tree must be rebuilt. Empty input yields false.
pub fn affects_schema(sql: &str) -> bool {
    classify(sql, &SCHEMA_PREFIXES)
}

/// True if executing `sql` may change table contents, meaning any cached
/// row data must be refetched. Empty input yields false.
///
/// A statement can affect both schema and data (`ALTER`, `DROP`).
pub fn affects_data(sql: &str) -> bool {
    classify(sql, &DATA_PREFIXES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements() {
        assert!(affects_schema("create table t(x)"));
        assert!(affects_schema("DROP VIEW v"));
        assert!(affects_schema("attach database 'x.db' as x"));
        assert!(!affects_schema("select * from t"));
        assert!(!affects_schema("insert into t values (1)"));
    }

    #[test]
    fn test_data_statements() {
        assert!(affects_data("  update t set x=1"));
        assert!(affects_data("insert into t values (1)"));
        assert!(affects_data("REPLACE INTO t VALUES (2)"));
        assert!(!affects_data("select * from t"));
        assert!(!affects_data("create table t(x)"));
    }

    #[test]
    fn test_both_at_once() {
        assert!(affects_schema("alter table t add column y"));
        assert!(affects_data("alter table t add column y"));
    }

    #[test]
    fn test_exec_anywhere() {
        assert!(affects_schema("select exec_count from stats"));
        assert!(affects_data("select exec_count from stats"));
    }

    #[test]
    fn test_empty_input() {
        assert!(!affects_schema(""));
        assert!(!affects_schema("   \n\t"));
        assert!(!affects_data(""));
    }
}
