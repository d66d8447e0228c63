//! Console reporting for sweep runs.
//!
//! Everything the operator sees on stdout funnels through here. The writer
//! is a parameter so tests can capture the exact output; diagnostics go
//! through `tracing`, not this module.

use std::io::{self, Write};

use http::StatusCode;

/// Prints the endpoint the sweep is running against.
pub fn endpoint(out: &mut impl Write, url: &str) -> io::Result<()> {
    writeln!(out, "Using url: {url}")
}

/// Prints the number of indices matching the partition prefix.
pub fn filtered_count(out: &mut impl Write, count: usize) -> io::Result<()> {
    writeln!(out, "Total {count} indices")
}

/// Prints the full deletion plan, dry-run included.
pub fn deletion_plan(out: &mut impl Write, plan: &[String]) -> io::Result<()> {
    writeln!(out, "Indices to delete:")?;
    for name in plan {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}

/// Prints the dry-run notice in place of deletion output.
pub fn dry_run_notice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "DRY mode, no changes made.")
}

/// Announces a delete before it is issued; the status follows on the same
/// line once the call returns.
pub fn deleting(out: &mut impl Write, name: &str) -> io::Result<()> {
    write!(out, "Deleting index: {name} ... ")?;
    out.flush()
}

/// Completes a delete announcement with the response status.
pub fn delete_status(out: &mut impl Write, status: StatusCode) -> io::Result<()> {
    writeln!(out, "{}", status.as_u16())
}

/// Prints the final count of deleted indices.
pub fn deleted_count(out: &mut impl Write, count: usize) -> io::Result<()> {
    writeln!(out, "Deleted {count} indices")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_endpoint_line() {
        assert_eq!(
            captured(|out| endpoint(out, "http://localhost:9200/")),
            "Using url: http://localhost:9200/\n"
        );
    }

    #[test]
    fn test_deletion_plan_lists_every_name() {
        let plan = vec![
            "events-2020-01-01".to_string(),
            "events-2020-06-01".to_string(),
        ];
        assert_eq!(
            captured(|out| deletion_plan(out, &plan)),
            "Indices to delete:\n  events-2020-01-01\n  events-2020-06-01\n"
        );
    }

    #[test]
    fn test_empty_plan_still_prints_heading() {
        assert_eq!(captured(|out| deletion_plan(out, &[])), "Indices to delete:\n");
    }

    #[test]
    fn test_delete_line_is_split_around_the_call() {
        let output = captured(|out| {
            deleting(out, "events-2020-01-01")?;
            delete_status(out, StatusCode::OK)
        });
        assert_eq!(output, "Deleting index: events-2020-01-01 ... 200\n");
    }

    #[test]
    fn test_counts_and_dry_run_notice() {
        assert_eq!(captured(|out| filtered_count(out, 2)), "Total 2 indices\n");
        assert_eq!(captured(|out| deleted_count(out, 2)), "Deleted 2 indices\n");
        assert_eq!(
            captured(|out| dry_run_notice(out)),
            "DRY mode, no changes made.\n"
        );
    }
}
