//! Ingest Use Case
//!
//! Orchestrates one ingest run:
//! 1. Scan the assets directory (a missing directory aborts before anything changes)
//! 2. Lock, load and parse the ledger
//! 3. Exact pass: place every asset whose name matches a slot
//! 4. Allocation pass: hand free slots to the remaining assets
//! 5. Recount the summary line and persist the ledger

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{AssetFile, LedgerDocument, SlotRecord};
use crate::domain::ports::{
    AssetSource, FileSystem, IngestEvent, IngestEventSink, LedgerRepository, NoopEventSink,
};
use crate::domain::services::{
    CandidatePool, LedgerDiff, LedgerParser, NameMatcher, SlotAllocator,
};
use crate::domain::value_objects::Tier;
use crate::error::IngestResult;

use super::options::IngestOptions;
use super::result::{AllocatedAsset, IngestReport, MatchedAsset};

/// Where an asset landed
struct Placement {
    destination: PathBuf,
    unchanged: bool,
}

/// Ingest use case - reconciles assets with the ledger
pub struct IngestUseCase<LR, AS, FS>
where
    LR: LedgerRepository,
    AS: AssetSource,
    FS: FileSystem,
{
    ledger_repo: LR,
    asset_source: AS,
    file_system: FS,
}

impl<LR, AS, FS> IngestUseCase<LR, AS, FS>
where
    LR: LedgerRepository,
    AS: AssetSource,
    FS: FileSystem,
{
    pub fn new(ledger_repo: LR, asset_source: AS, file_system: FS) -> Self {
        Self {
            ledger_repo,
            asset_source,
            file_system,
        }
    }

    /// Run silently
    pub fn execute(&self, options: &IngestOptions) -> IngestResult<IngestReport> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Run, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &IngestOptions,
        events: Arc<dyn IngestEventSink>,
    ) -> IngestResult<IngestReport> {
        events.on_event(IngestEvent::Started {
            assets_dir: options.assets_dir.clone(),
            ledger: options.ledger_path.clone(),
            dry_run: options.dry_run,
        });

        let assets = self.asset_source.scan(&options.assets_dir)?;

        // Dry runs never write, so they do not contend for the lock
        let _guard = if options.dry_run {
            None
        } else {
            Some(self.ledger_repo.lock(&options.ledger_path)?)
        };

        let original = self.ledger_repo.load(&options.ledger_path)?;
        let table = LedgerParser::new().parse(&original);
        let mut ledger = original.clone();
        let writer = options.ledger_writer();

        events.on_event(IngestEvent::LedgerParsed {
            slot_count: table.len(),
            complete_count: table.complete_count(),
        });
        events.on_event(IngestEvent::AssetsScanned {
            asset_count: assets.len(),
        });

        if !options.dry_run {
            for tier in Tier::all() {
                self.file_system
                    .create_dir_all(&options.icons_dir.join(tier.folder_name()))?;
            }
        }

        let mut report = IngestReport {
            slot_count: table.len(),
            asset_count: assets.len(),
            declared_total: writer.declared_total(),
            dry_run: options.dry_run,
            ..IngestReport::default()
        };

        // Exact pass
        let matcher = NameMatcher::new(options.policy);
        let mut pool = CandidatePool::from_table(&table);
        let mut claimed = BTreeSet::new();
        let mut unmatched: Vec<&AssetFile> = Vec::new();

        for asset in &assets {
            let found = matcher
                .best_match(asset.normalized_name(), pool.iter())
                .and_then(|m| table.get(m.id).map(|record| (m, record)));
            let Some((name_match, record)) = found else {
                unmatched.push(asset);
                continue;
            };

            pool.claim(record.id());
            claimed.insert(record.id());

            let placement = self.place(asset, record, options)?;
            writer.mark_complete(&mut ledger, record);

            events.on_event(IngestEvent::Matched {
                asset: asset.display_name(),
                slot_id: record.id(),
                slot_name: record.name().to_string(),
                score: name_match.score,
                destination: placement.destination.clone(),
                unchanged: placement.unchanged,
            });
            report.matched.push(MatchedAsset {
                asset: asset.display_name(),
                slot_id: record.id(),
                slot_name: record.name().to_string(),
                score: name_match.score,
                destination: placement.destination,
                unchanged: placement.unchanged,
            });
        }

        let free_ids: Vec<u32> = table
            .records()
            .filter(|r| !claimed.contains(&r.id()))
            .filter(|r| options.include_complete || !r.is_complete())
            .map(|r| r.id())
            .collect();

        events.on_event(IngestEvent::PassCompleted {
            matched: report.matched.len(),
            unmatched: unmatched.len(),
            free_slots: free_ids.len(),
        });

        // Allocation pass
        let outcome = SlotAllocator::new().allocate(unmatched, free_ids);

        for (asset, id) in outcome.allocated {
            let Some(record) = table.get(id) else {
                continue;
            };

            let placement = self.place(asset, record, options)?;
            let rewrite = writer.apply_allocation(&mut ledger, record, asset.filename());

            events.on_event(IngestEvent::Allocated {
                asset: asset.display_name(),
                slot_id: id,
                previous_name: record.name().to_string(),
                new_name: rewrite.title.clone(),
                destination: placement.destination.clone(),
                unchanged: placement.unchanged,
            });
            report.allocated.push(AllocatedAsset {
                asset: asset.display_name(),
                slot_id: id,
                previous_name: record.name().to_string(),
                new_name: rewrite.title,
                destination: placement.destination,
                unchanged: placement.unchanged,
                description_rewritten: rewrite.description_rewritten,
            });
        }

        for asset in outcome.unresolved {
            events.on_event(IngestEvent::Unresolved {
                asset: asset.display_name(),
            });
            report.unresolved.push(asset.display_name());
        }

        report.complete_count = writer.update_summary(&mut ledger);
        self.persist(&ledger, options)?;

        events.on_event(IngestEvent::LedgerWritten {
            path: options.ledger_path.clone(),
            complete_count: report.complete_count,
            dry_run: options.dry_run,
        });

        report.ledger_diff = LedgerDiff::between(
            &original,
            &ledger,
            &options.ledger_path.display().to_string(),
        );

        events.on_event(IngestEvent::Completed {
            matched: report.matched.len(),
            allocated: report.allocated.len(),
            unresolved: report.unresolved.len(),
        });

        Ok(report)
    }

    /// Copy an asset to `<icons>/<tier folder>/icon_<id>.png`
    fn place(
        &self,
        asset: &AssetFile,
        record: &SlotRecord,
        options: &IngestOptions,
    ) -> IngestResult<Placement> {
        let dir = options.icons_dir.join(record.tier().folder_name());
        let destination = dir.join(format!("icon_{}.png", record.id()));

        let unchanged = self.file_system.exists(&destination)
            && self.file_system.hash(&destination)? == self.file_system.hash(asset.path())?;

        if !options.dry_run && !unchanged {
            self.file_system.create_dir_all(&dir)?;
            self.file_system.copy(asset.path(), &destination)?;
        }

        Ok(Placement {
            destination,
            unchanged,
        })
    }

    fn persist(&self, ledger: &LedgerDocument, options: &IngestOptions) -> IngestResult<()> {
        if options.dry_run {
            return Ok(());
        }
        self.ledger_repo.save(ledger, &options.ledger_path)?;
        Ok(())
    }
}
