//! Cell dependency resolution.
//!
//! A `dep_group` cell dep references a cell whose data lists further out
//! points. Resolution replaces each group with one `code` dep per listed out
//! point, at the group's position, so the result names every cell a script
//! may load.
//!
//! Group cell data layout:
//!
//! ```text
//! count: u32 LE
//! count × { tx_hash: [u8; 32], index: u32 LE }
//! ```

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, warn};
use xbridge_types::{CellDep, DepType, OutPoint, OUT_POINT_SIZE};

use crate::error::SnapshotError;
use crate::ledger::LedgerReader;

const COUNT_SIZE: usize = 4;

/// Default bound on in-flight ledger lookups.
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 16;

/// Parse the out points stored in the data of dep group cell `group`.
///
/// Bytes past the declared records are ignored.
pub fn parse_dep_group(group: &OutPoint, data: &[u8]) -> Result<Vec<OutPoint>, SnapshotError> {
    let malformed = |expected: usize| SnapshotError::MalformedDepGroup {
        out_point: group.clone(),
        expected,
        actual: data.len(),
    };

    if data.len() < COUNT_SIZE {
        return Err(malformed(COUNT_SIZE));
    }
    let mut count = [0u8; COUNT_SIZE];
    count.copy_from_slice(&data[..COUNT_SIZE]);
    let count = u32::from_le_bytes(count) as usize;

    let expected = count
        .checked_mul(OUT_POINT_SIZE)
        .and_then(|records| records.checked_add(COUNT_SIZE))
        .ok_or_else(|| malformed(usize::MAX))?;
    if data.len() < expected {
        return Err(malformed(expected));
    }
    if data.len() > expected {
        warn!(
            "Dep group {} has {} trailing bytes after {} out points",
            group,
            data.len() - expected,
            count
        );
    }

    Ok(data[COUNT_SIZE..expected]
        .chunks_exact(OUT_POINT_SIZE)
        .map(|record| {
            let mut packed = [0u8; OUT_POINT_SIZE];
            packed.copy_from_slice(record);
            OutPoint::from_packed(&packed)
        })
        .collect())
}

/// Expands dep groups against a ledger.
#[derive(Debug, Clone)]
pub struct CellDepResolver<L> {
    reader: L,
    max_concurrent_lookups: usize,
    retain_group_cells: bool,
}

impl<L: LedgerReader> CellDepResolver<L> {
    pub fn new(reader: L) -> Self {
        Self {
            reader,
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
            retain_group_cells: false,
        }
    }

    /// Bound the number of group cells fetched at once (minimum 1).
    pub fn with_max_concurrent_lookups(mut self, limit: usize) -> Self {
        self.max_concurrent_lookups = limit.max(1);
        self
    }

    /// Also emit each group dep after its expansion.
    pub fn with_retain_group_cells(mut self, retain: bool) -> Self {
        self.retain_group_cells = retain;
        self
    }

    /// Resolve `deps` into concrete deps, preserving input order.
    ///
    /// Fails on the first lookup or parse error; nothing is returned for a
    /// partially resolved list.
    pub async fn resolve(&self, deps: &[CellDep]) -> Result<Vec<CellDep>, SnapshotError> {
        let expansions: Vec<Vec<CellDep>> = stream::iter(deps.iter().map(|dep| self.expand(dep)))
            .buffered(self.max_concurrent_lookups)
            .try_collect()
            .await?;
        Ok(expansions.into_iter().flatten().collect())
    }

    async fn expand(&self, dep: &CellDep) -> Result<Vec<CellDep>, SnapshotError> {
        match dep.dep_type {
            DepType::Code => Ok(vec![dep.clone()]),
            DepType::DepGroup => {
                let cell = self.reader.get_live_cell(&dep.out_point).await?;
                let out_points = parse_dep_group(&dep.out_point, cell.data.as_bytes())?;
                let count = out_points.len();
                debug!("Dep group {} lists {} out points", dep.out_point, count);

                let mut expanded = Vec::with_capacity(out_points.len() + 1);
                for out_point in out_points {
                    debug!("Expanded dep {}", out_point);
                    expanded.push(CellDep::code(out_point));
                }
                if self.retain_group_cells {
                    expanded.push(dep.clone());
                }
                Ok(expanded)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LiveCell;
    use crate::memory::InMemoryLedger;
    use xbridge_types::{CellOutput, HexBytes, Script, ScriptHashType, H256};

    fn op(byte: u8, index: u32) -> OutPoint {
        OutPoint::new(H256([byte; 32]), index)
    }

    fn group_data(out_points: &[OutPoint]) -> Vec<u8> {
        let mut data = (out_points.len() as u32).to_le_bytes().to_vec();
        for out_point in out_points {
            data.extend_from_slice(&out_point.to_packed());
        }
        data
    }

    fn cell(data: Vec<u8>) -> LiveCell {
        LiveCell {
            output: CellOutput {
                capacity: 100,
                lock: Script::new(H256::ZERO, ScriptHashType::Data, Vec::new()),
                type_: None,
            },
            data: HexBytes::new(data),
        }
    }

    #[test]
    fn test_parse_dep_group() {
        let listed = vec![op(1, 0), op(2, 7), op(1, 0)];
        let parsed = parse_dep_group(&op(9, 0), &group_data(&listed)).unwrap();
        assert_eq!(parsed, listed);

        let empty = parse_dep_group(&op(9, 0), &0u32.to_le_bytes()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_parse_dep_group_rejects_short_data() {
        let err = parse_dep_group(&op(9, 0), &[1, 0]).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::MalformedDepGroup {
                expected: 4,
                actual: 2,
                ..
            }
        ));

        let mut data = group_data(&[op(1, 0), op(2, 0)]);
        data.truncate(data.len() - 1);
        let err = parse_dep_group(&op(9, 0), &data).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::MalformedDepGroup {
                expected: 76,
                actual: 75,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_dep_group_tolerates_trailing_bytes() {
        let mut data = group_data(&[op(1, 3)]);
        data.extend_from_slice(&[0xaa; 5]);
        assert_eq!(parse_dep_group(&op(9, 0), &data).unwrap(), vec![op(1, 3)]);
    }

    #[test]
    fn test_parse_dep_group_huge_count() {
        let err = parse_dep_group(&op(9, 0), &u32::MAX.to_le_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::MalformedDepGroup { actual: 4, .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_expands_in_place() {
        let mut ledger = InMemoryLedger::new();
        ledger.insert_cell(op(9, 0), cell(group_data(&[op(2, 0), op(2, 1)])));

        let deps = vec![
            CellDep::code(op(1, 0)),
            CellDep::dep_group(op(9, 0)),
            CellDep::code(op(3, 0)),
        ];
        let resolved = CellDepResolver::new(&ledger).resolve(&deps).await.unwrap();
        assert_eq!(
            resolved,
            vec![
                CellDep::code(op(1, 0)),
                CellDep::code(op(2, 0)),
                CellDep::code(op(2, 1)),
                CellDep::code(op(3, 0)),
            ]
        );
    }

    #[tokio::test]
    async fn test_resolve_retains_group_cells() {
        let mut ledger = InMemoryLedger::new();
        ledger.insert_cell(op(9, 0), cell(group_data(&[op(2, 0)])));

        let resolved = CellDepResolver::new(&ledger)
            .with_retain_group_cells(true)
            .resolve(&[CellDep::dep_group(op(9, 0))])
            .await
            .unwrap();
        assert_eq!(
            resolved,
            vec![CellDep::code(op(2, 0)), CellDep::dep_group(op(9, 0))]
        );
    }

    #[tokio::test]
    async fn test_resolve_missing_group_cell() {
        let ledger = InMemoryLedger::new();
        let err = CellDepResolver::new(&ledger)
            .resolve(&[CellDep::dep_group(op(9, 0))])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Lookup(crate::LedgerError::CellNotFound(_))
        ));
    }
}
