//! Zoo-file parsing and paths serialization.
//!
//! Input file, one section per line, in order: dimensions `(x,y,z)`, depot
//! `(x,y,z)`, integer battery capacity, storages `[(x,y,z,d),...]` with
//! d in {c,h,o}, enclosures `[(x,y,z,importance,d),...]`, dead zones
//! `[(x,y,r),...]`. Empty collections are `[]`.
//!
//! Output file: `[[(x,y),(x,y),...],...]` with z dropped and no trailing
//! separators.
//!
//! Malformed content is reported as `PlanError::InvalidZoo` so the binary can
//! exit with a parse-specific status; plain I/O failures stay `io::Error`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use zooplan::api::{DeadZone, Diet, Enclosure, FoodStorage, PlanError, Point, Run, Zoo};

/// Battery swaps are a convention keyed on the declared capacity; unknown
/// capacities get no extra runs.
pub fn swaps_for_capacity(capacity: i64) -> u32 {
    match capacity {
        1125 => 10,
        2750 => 50,
        9250 => 250,
        _ => 0,
    }
}

fn malformed(reason: String) -> anyhow::Error {
    PlanError::InvalidZoo(reason).into()
}

/// Parse `(a,b,...)` into its comma-separated fields.
fn paren_fields(s: &str) -> Result<Vec<&str>> {
    let body = s
        .trim()
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(|| malformed(format!("expected a parenthesized tuple, got {s:?}")))?;
    Ok(body.split(',').map(str::trim).collect())
}

fn parse_i64(field: &str) -> Result<i64> {
    field
        .parse::<i64>()
        .map_err(|_| malformed(format!("expected an integer, got {field:?}")))
}

fn parse_point(line: &str) -> Result<Point> {
    let fields = paren_fields(line)?;
    if fields.len() != 3 {
        return Err(malformed(format!("expected (x,y,z), got {line:?}")));
    }
    Ok(Point::new(
        parse_i64(fields[0])?,
        parse_i64(fields[1])?,
        parse_i64(fields[2])?,
    ))
}

fn parse_diet(field: &str) -> Result<Diet> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Diet::from_char(c).ok_or_else(|| malformed(format!("unknown diet tag {field:?}")))
        }
        _ => Err(malformed(format!("unknown diet tag {field:?}"))),
    }
}

/// Split a bracketed list `[(...),(...)]` into per-tuple field vectors.
fn tuple_list(line: &str) -> Result<Vec<Vec<&str>>> {
    let inner = line
        .trim()
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(|| malformed(format!("expected a bracketed list, got {line:?}")))?;
    tuple_list_inner(inner)
}

/// Same, for a list body whose brackets were already stripped.
fn tuple_list_inner(inner: &str) -> Result<Vec<Vec<&str>>> {
    let mut out = Vec::new();
    for chunk in inner.split(')') {
        let chunk = chunk.trim().trim_start_matches(',').trim();
        if chunk.is_empty() {
            continue;
        }
        let body = chunk
            .strip_prefix('(')
            .ok_or_else(|| malformed(format!("malformed list item near {chunk:?}")))?;
        out.push(body.split(',').map(str::trim).collect());
    }
    Ok(out)
}

/// Parse a whole zoo file body.
pub fn parse_zoo(text: &str) -> Result<Zoo> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let mut next_line = |what: &str| {
        lines
            .next()
            .ok_or_else(|| malformed(format!("missing line for {what}")))
    };

    let dimensions = parse_point(next_line("dimensions")?)?;
    let depot = parse_point(next_line("depot")?)?;
    let capacity_line = next_line("battery capacity")?;
    let capacity = parse_i64(capacity_line.trim())?;

    let mut storages = Vec::new();
    for fields in tuple_list(next_line("food storages")?)? {
        if fields.len() != 4 {
            return Err(malformed(format!("expected (x,y,z,diet), got {fields:?}")));
        }
        storages.push(FoodStorage {
            location: Point::new(
                parse_i64(fields[0])?,
                parse_i64(fields[1])?,
                parse_i64(fields[2])?,
            ),
            diet: parse_diet(fields[3])?,
        });
    }

    let mut enclosures = Vec::new();
    for fields in tuple_list(next_line("enclosures")?)? {
        if fields.len() != 5 {
            return Err(malformed(format!(
                "expected (x,y,z,importance,diet), got {fields:?}"
            )));
        }
        let importance: f64 = fields[3]
            .parse()
            .map_err(|_| malformed(format!("bad importance {:?}", fields[3])))?;
        enclosures.push(Enclosure {
            feeding_point: Point::new(
                parse_i64(fields[0])?,
                parse_i64(fields[1])?,
                parse_i64(fields[2])?,
            ),
            importance,
            diet: parse_diet(fields[4])?,
        });
    }

    let mut dead_zones = Vec::new();
    for fields in tuple_list(next_line("dead zones")?)? {
        if fields.len() != 3 {
            return Err(malformed(format!("expected (x,y,r), got {fields:?}")));
        }
        dead_zones.push(DeadZone::new(
            parse_i64(fields[0])?,
            parse_i64(fields[1])?,
            parse_i64(fields[2])?,
        ));
    }

    Ok(Zoo {
        dimensions,
        depot,
        battery_capacity: capacity as f64,
        battery_swaps: swaps_for_capacity(capacity),
        storages,
        enclosures,
        dead_zones,
    })
}

pub fn read_zoo(path: &Path) -> Result<Zoo> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading zoo file {}", path.display()))?;
    parse_zoo(&text).with_context(|| format!("parsing zoo file {}", path.display()))
}

/// Render a zoo back into the input format (used by `sample`).
pub fn format_zoo(zoo: &Zoo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", zoo.dimensions);
    let _ = writeln!(out, "{}", zoo.depot);
    let _ = writeln!(out, "{}", zoo.battery_capacity as i64);

    let storages: Vec<String> = zoo
        .storages
        .iter()
        .map(|s| {
            format!(
                "({},{},{},{})",
                s.location.x,
                s.location.y,
                s.location.z,
                s.diet.as_char()
            )
        })
        .collect();
    let _ = writeln!(out, "[{}]", storages.join(","));

    let enclosures: Vec<String> = zoo
        .enclosures
        .iter()
        .map(|e| {
            format!(
                "({},{},{},{},{})",
                e.feeding_point.x,
                e.feeding_point.y,
                e.feeding_point.z,
                e.importance,
                e.diet.as_char()
            )
        })
        .collect();
    let _ = writeln!(out, "[{}]", enclosures.join(","));

    let zones: Vec<String> = zoo
        .dead_zones
        .iter()
        .map(|d| format!("({},{},{})", d.cx, d.cy, d.radius))
        .collect();
    let _ = writeln!(out, "[{}]", zones.join(","));
    out
}

/// Render runs in the output format: z dropped, nested bracket lists.
pub fn format_paths(runs: &[Run]) -> String {
    let mut out = String::from("[");
    for (i, run) in runs.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('[');
        for (j, p) in run.path.iter().enumerate() {
            if j > 0 {
                out.push(',');
            }
            let _ = write!(out, "({},{})", p.x, p.y);
        }
        out.push(']');
    }
    out.push(']');
    out
}

pub fn write_paths(path: &Path, runs: &[Run]) -> Result<()> {
    fs::write(path, format_paths(runs))
        .with_context(|| format!("writing paths file {}", path.display()))
}

/// Parse a paths file back into runs of XY pairs (used by `check`).
pub fn parse_paths(text: &str) -> Result<Vec<Vec<(i64, i64)>>> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(|| malformed("expected an outer bracketed list".to_string()))?;
    let mut runs = Vec::new();
    let mut rest = inner;
    while let Some(start) = rest.find('[') {
        let end = rest[start..]
            .find(']')
            .map(|e| start + e)
            .ok_or_else(|| malformed("unterminated run list".to_string()))?;
        let run_body = &rest[start + 1..end];
        let mut run = Vec::new();
        for fields in tuple_list_inner(run_body)? {
            if fields.len() != 2 {
                return Err(malformed(format!("expected (x,y), got {fields:?}")));
            }
            run.push((parse_i64(fields[0])?, parse_i64(fields[1])?));
        }
        runs.push(run);
        rest = &rest[end + 1..];
    }
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zooplan::api::{generate_runs_with_defaults, EnclosureId};

    const WORKED_EXAMPLE: &str = "(40,40,20)\n\
                                  (8,10,10)\n\
                                  999999\n\
                                  [(6,9,2,h)]\n\
                                  [(7,24,5,5.5,h)]\n\
                                  []\n";

    #[test]
    fn parses_the_worked_example_layout() {
        let zoo = parse_zoo(WORKED_EXAMPLE).unwrap();
        assert_eq!(zoo.depot, Point::new(8, 10, 10));
        assert_eq!(zoo.battery_capacity, 999999.0);
        assert_eq!(zoo.battery_swaps, 0);
        assert_eq!(zoo.storages.len(), 1);
        assert_eq!(zoo.storages[0].diet, Diet::Herbivore);
        assert_eq!(zoo.enclosures.len(), 1);
        assert!((zoo.enclosures[0].importance - 5.5).abs() < 1e-12);
        assert!(zoo.dead_zones.is_empty());
    }

    #[test]
    fn capacity_convention_sets_swaps() {
        assert_eq!(swaps_for_capacity(1125), 10);
        assert_eq!(swaps_for_capacity(2750), 50);
        assert_eq!(swaps_for_capacity(9250), 250);
        assert_eq!(swaps_for_capacity(999999), 0);
        assert_eq!(swaps_for_capacity(500), 0);
    }

    #[test]
    fn malformed_lines_are_invalid_zoo_errors() {
        for text in [
            "",
            "(1,2)\n(0,0,0)\n10\n[]\n[]\n[]\n",
            "(9,9,9)\n(0,0,0)\nten\n[]\n[]\n[]\n",
            "(9,9,9)\n(0,0,0)\n10\n[(1,2,3,x)]\n[]\n[]\n",
            "(9,9,9)\n(0,0,0)\n10\n[]\n[(1,2,3,h)]\n[]\n",
        ] {
            let err = parse_zoo(text).unwrap_err();
            assert!(
                err.downcast_ref::<PlanError>()
                    .is_some_and(|e| matches!(e, PlanError::InvalidZoo(_))),
                "{text:?} should fail as InvalidZoo, got {err:?}"
            );
        }
    }

    #[test]
    fn zoo_round_trips_through_the_input_format() {
        let zoo = parse_zoo(WORKED_EXAMPLE).unwrap();
        let again = parse_zoo(&format_zoo(&zoo)).unwrap();
        assert_eq!(again.dimensions, zoo.dimensions);
        assert_eq!(again.depot, zoo.depot);
        assert_eq!(again.battery_capacity, zoo.battery_capacity);
        assert_eq!(again.storages, zoo.storages);
        assert_eq!(again.enclosures, zoo.enclosures);
        assert_eq!(again.dead_zones, zoo.dead_zones);
    }

    #[test]
    fn paths_render_with_z_dropped_and_no_trailing_separators() {
        let zoo = parse_zoo(WORKED_EXAMPLE).unwrap();
        let runs = generate_runs_with_defaults(&zoo).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].fed, vec![EnclosureId(0)]);
        assert_eq!(
            format_paths(&runs),
            "[[(8,10),(6,9),(7,24),(8,10)]]"
        );
        assert_eq!(format_paths(&[]), "[]");
    }

    #[test]
    fn paths_parse_back() {
        let parsed = parse_paths("[[(8,10),(6,9),(7,24),(8,10)],[(8,10),(1,2),(8,10)]]").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0][1], (6, 9));
        assert_eq!(parsed[1], vec![(8, 10), (1, 2), (8, 10)]);
        assert_eq!(parse_paths("[]").unwrap().len(), 0);
    }

    #[test]
    fn files_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let zoo_path = dir.path().join("zoo.txt");
        std::fs::write(&zoo_path, WORKED_EXAMPLE).unwrap();
        let zoo = read_zoo(&zoo_path).unwrap();
        let runs = generate_runs_with_defaults(&zoo).unwrap();
        let out_path = dir.path().join("paths.txt");
        write_paths(&out_path, &runs).unwrap();
        let text = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(parse_paths(&text).unwrap().len(), runs.len());
    }
}
