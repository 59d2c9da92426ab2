//! Staged scan over needle placements.
//!
//! Candidates are visited by bottom-right corner in raster order (rows top
//! to bottom, columns left to right) and pass three filters of increasing
//! cost: window sum and sum of squares, per-column and per-row sums, then
//! exact pixel comparison. Only the last stage decides a match; the first
//! two merely skip placements that cannot match.

use crate::image::ImageView;
use crate::integral::SummedAreaTable;
use crate::search::plan::NeedleProfile;
use crate::search::{Match, MatchConfig};
use crate::trace::{trace_event, trace_span};
use crate::util::GrayAreaResult;

/// Haystack tables shared by the pruning stages.
struct HaystackTables {
    plain: SummedAreaTable,
    quadratic: SummedAreaTable,
}

/// Survivor counts per stage, reported through tracing.
#[derive(Default)]
struct StageCounts {
    candidates: usize,
    moments: usize,
    projections: usize,
}

pub(crate) fn locate_staged(
    haystack: ImageView<'_, u8>,
    needle: ImageView<'_, u8>,
    cfg: &MatchConfig,
) -> GrayAreaResult<Option<Match>> {
    let _span = trace_span!(
        "locate",
        haystack_w = haystack.width(),
        haystack_h = haystack.height(),
        needle_w = needle.width(),
        needle_h = needle.height()
    )
    .entered();

    let nw = needle.width();
    let nh = needle.height();
    if nw > haystack.width() || nh > haystack.height() {
        return Ok(None);
    }
    if needle.is_empty() {
        return Ok(Some(Match { x: 0, y: 0 }));
    }

    let profile = NeedleProfile::from_view(needle)?;
    let tables = HaystackTables {
        plain: SummedAreaTable::plain(haystack)?,
        quadratic: SummedAreaTable::quadratic(haystack)?,
    };

    let mut counts = StageCounts::default();
    let mut found = None;
    'scan: for y1 in nh - 1..haystack.height() {
        for x1 in nw - 1..haystack.width() {
            counts.candidates += 1;
            let x = x1 + 1 - nw;
            let y = y1 + 1 - nh;

            if cfg.moment_filter && !moments_match(&tables, &profile, x, y) {
                continue;
            }
            counts.moments += 1;

            if cfg.projection_filter && !projections_match(&tables.plain, &profile, x, y) {
                continue;
            }
            counts.projections += 1;

            if matches_at(haystack, x, y, needle) {
                found = Some(Match { x, y });
                break 'scan;
            }
        }
    }

    trace_event!(
        "locate_done",
        candidates = counts.candidates,
        moment_survivors = counts.moments,
        projection_survivors = counts.projections,
        found = found.is_some()
    );
    Ok(found)
}

/// Compares window sum and sum of squares against the needle totals.
fn moments_match(tables: &HaystackTables, profile: &NeedleProfile, x: usize, y: usize) -> bool {
    let x1 = x + profile.width() - 1;
    let y1 = y + profile.height() - 1;
    tables.plain.rect_sum(x, y, x1, y1) == profile.sum()
        && tables.quadratic.rect_sum(x, y, x1, y1) == profile.sum_sq()
}

/// Compares every column sum, then every row sum, inside the window.
fn projections_match(plain: &SummedAreaTable, profile: &NeedleProfile, x: usize, y: usize) -> bool {
    let x1 = x + profile.width() - 1;
    let y1 = y + profile.height() - 1;
    let cols_ok = profile
        .col_sums()
        .iter()
        .enumerate()
        .all(|(i, &expected)| plain.rect_sum(x + i, y, x + i, y1) == expected);
    cols_ok
        && profile
            .row_sums()
            .iter()
            .enumerate()
            .all(|(j, &expected)| plain.rect_sum(x, y + j, x1, y + j) == expected)
}

/// Returns true if `needle` equals the haystack window with top-left `(x, y)`.
///
/// Placements where the needle does not fit never match.
pub fn matches_at(haystack: ImageView<'_, u8>, x: usize, y: usize, needle: ImageView<'_, u8>) -> bool {
    if !haystack.contains_rect(x, y, needle.width(), needle.height()) {
        return false;
    }
    let nw = needle.width();
    needle.rows().enumerate().all(|(j, needle_row)| {
        haystack
            .row(y + j)
            .is_some_and(|hay_row| &hay_row[x..x + nw] == needle_row)
    })
}
