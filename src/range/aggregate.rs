//! Batches of ranges built all-or-nothing.
//!
//! Ranges are built in selector order into a local vector. The first
//! failure drops that vector, which releases every provider reference taken
//! so far, and the error is returned. Callers get either exactly the ranges
//! they asked for or a clean failure.

use super::{RangeSelector, TextRange, make_range};
use crate::error::{Error, Result};
use crate::provider::collaborators::QuerySnapshot;
use crate::provider::lifetime::ProviderHandle;

/// Build one range per selector, in order, or none at all.
pub fn make_ranges<I>(
    owner: &ProviderHandle,
    snapshot: &QuerySnapshot,
    selectors: I,
) -> Result<Vec<TextRange>>
where
    I: IntoIterator<Item = RangeSelector>,
    I::IntoIter: ExactSizeIterator,
{
    let selectors = selectors.into_iter();
    let requested = selectors.len();
    if requested > owner.state().config.max_batch {
        return Err(Error::OutOfResources { requested });
    }

    let mut ranges = Vec::new();
    ranges
        .try_reserve_exact(requested)
        .map_err(|_| Error::OutOfResources { requested })?;
    for selector in selectors {
        ranges.push(make_range(owner, snapshot, selector)?);
    }
    Ok(ranges)
}

/// One full-row range per visible row, top to bottom, wrapping past the
/// end of the row store.
pub fn visible_ranges(owner: &ProviderHandle, snapshot: &QuerySnapshot) -> Result<Vec<TextRange>> {
    make_ranges(
        owner,
        snapshot,
        snapshot
            .geometry
            .viewport_rows()
            .map(RangeSelector::ViewportRow),
    )
}

/// One full-row range per selection rectangle, in the order supplied.
///
/// No active selection is a successful, empty result.
pub fn selection_ranges(owner: &ProviderHandle, snapshot: &QuerySnapshot) -> Result<Vec<TextRange>> {
    let Some(rects) = snapshot.selection.as_deref() else {
        return Ok(Vec::new());
    };
    make_ranges(
        owner,
        snapshot,
        rects.iter().map(|rect| RangeSelector::Row(rect.top)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferGeometry;
    use crate::config::ProviderConfig;
    use crate::error::ConstructionError;
    use crate::provider::collaborators::SelectionRect;
    use crate::provider::test_support::{fixed_handle, fixed_handle_with_config};

    fn snapshot() -> QuerySnapshot {
        QuerySnapshot::from_geometry(BufferGeometry::new(5, 10, 3, 4).unwrap(), 5)
    }

    fn spans(ranges: &[TextRange]) -> Vec<std::ops::Range<usize>> {
        ranges.iter().map(TextRange::span).collect()
    }

    #[test]
    fn test_make_ranges_preserves_order() {
        let handle = fixed_handle();
        let ranges = make_ranges(
            &handle,
            &snapshot(),
            [RangeSelector::Row(4), RangeSelector::Row(0), RangeSelector::Document],
        )
        .unwrap();
        assert_eq!(spans(&ranges), vec![40..50, 0..10, 0..50]);
        assert_eq!(handle.outstanding_refs(), 3);
    }

    #[test]
    fn test_make_ranges_all_or_nothing() {
        let handle = fixed_handle();
        let err = make_ranges(
            &handle,
            &snapshot(),
            [RangeSelector::Row(1), RangeSelector::Row(7), RangeSelector::Row(2)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::RowOutOfBounds { row: 7, total_rows: 5 })
        );
        assert_eq!(handle.outstanding_refs(), 0);
    }

    #[test]
    fn test_make_ranges_empty_batch() {
        let handle = fixed_handle();
        let ranges = make_ranges(&handle, &snapshot(), Vec::new()).unwrap();
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_make_ranges_over_batch_limit() {
        let handle = fixed_handle_with_config(ProviderConfig::default().with_max_batch(2));
        let err = make_ranges(
            &handle,
            &snapshot(),
            [RangeSelector::Row(0), RangeSelector::Row(1), RangeSelector::Row(2)],
        )
        .unwrap_err();
        assert_eq!(err, Error::OutOfResources { requested: 3 });
        assert_eq!(handle.outstanding_refs(), 0);
    }

    #[test]
    fn test_make_ranges_after_teardown() {
        let handle = fixed_handle();
        handle.teardown();
        let err = make_ranges(&handle, &snapshot(), [RangeSelector::Row(0)]).unwrap_err();
        assert_eq!(err, Error::Unavailable);
    }

    #[test]
    fn test_visible_ranges_wrap() {
        let handle = fixed_handle();
        let ranges = visible_ranges(&handle, &snapshot()).unwrap();
        assert_eq!(spans(&ranges), vec![30..40, 40..50, 0..10, 10..20]);
    }

    #[test]
    fn test_selection_ranges_inactive() {
        let handle = fixed_handle();
        let ranges = selection_ranges(&handle, &snapshot()).unwrap();
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_selection_ranges_active_but_empty() {
        let handle = fixed_handle();
        let snapshot = QuerySnapshot {
            selection: Some(Vec::new()),
            ..snapshot()
        };
        assert!(selection_ranges(&handle, &snapshot).unwrap().is_empty());
    }

    #[test]
    fn test_selection_ranges_cover_full_rows() {
        let handle = fixed_handle();
        let snapshot = QuerySnapshot {
            selection: Some(vec![SelectionRect::new(1, 2, 6), SelectionRect::new(2, 0, 3)]),
            ..snapshot()
        };
        let ranges = selection_ranges(&handle, &snapshot).unwrap();
        assert_eq!(spans(&ranges), vec![10..20, 20..30]);
    }
}
