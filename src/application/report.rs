//! Fixed-width table rendering for scan reports.

use crate::domain::entities::candidate::ScanReport;

/// Hard ceiling on rendered output, with room left for the message
/// envelope of downstream channels capped at 2000 characters.
const MAX_TABLE_CHARS: usize = 1900;

/// Render the ranked candidates as a fixed-width table.
///
/// Deterministic for a given report: column widths are fixed, names are
/// truncated or padded to 22 characters, and the whole output is
/// hard-truncated at 1900 characters with a trailing `...` (with the
/// 15-row ranking cap this should never trigger, but the guard is
/// mandatory).
pub fn render_table(report: &ScanReport) -> String {
    let header = "Rank | IATA | Name                   | CC(Open) | Dist(km) | \
                  Pop        | Income | CompSeats | BOS";
    let mut lines = vec![header.to_string(), "=".repeat(header.chars().count())];

    for (i, ranked) in report.ranked.iter().enumerate() {
        let c = &ranked.candidate;
        let name: String = c.airport.name.chars().take(22).collect();
        lines.push(format!(
            "{rank:4} | {iata:<4} | {name:<22} | {cc:2}({open:2})   | {dist:8.1} | \
             {pop:10} | {income:6} | {seats:9} | {score:6.2}",
            rank = i + 1,
            iata = c.airport.iata,
            name = name,
            cc = c.airport.country_code,
            open = c.openness,
            dist = c.distance_km,
            pop = c.airport.population,
            income = c.airport.income_level,
            seats = c.competition_seats,
            score = ranked.score,
        ));
    }

    let table = lines.join("\n");
    truncate_chars(table, MAX_TABLE_CHARS)
}

fn truncate_chars(s: String, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s;
    }
    let mut out: String = s.chars().take(limit).collect();
    out.push_str("...");
    out
}
