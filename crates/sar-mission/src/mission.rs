//! The `Mission` orchestrator.

use std::collections::{BTreeMap, BTreeSet};

use sar_core::{ClusterId, GeoPoint, Point, SarRng, spherical_centroid};
use sar_field::{FieldError, ProbabilityField};
use sar_grid::{CellId, HexGrid, SpatialIndex};
use sar_metrics::{ClusterMetrics, RunMetrics, evaluate_cluster, evaluate_search};
use sar_sim::{DetectionModel, SearchSimulator, SimError};
use sar_strategy::{ClusterFinder, PathFinderFactory};

use crate::config::MissionConfig;
use crate::error::{MissionError, MissionResult};
use crate::scenario::Scenario;

// Child-stream offsets off the master seed.  Scenario and detection draws
// get independent streams so changing the step budget never perturbs the
// generated scenario.
const SCENARIO_STREAM: u64 = 1;
const DETECTION_STREAM: u64 = 2;

/// Everything a completed run produced: one metric row per cluster plus the
/// aggregate.
#[derive(Debug)]
pub struct MissionReport {
    pub clusters: BTreeMap<ClusterId, ClusterMetrics>,
    pub aggregate: RunMetrics,
}

/// Orchestrates one full run: scenario generation, clustering, per-cluster
/// field construction and search, metric collection.
///
/// Clusters run to completion one at a time, in cluster-ID order.  Per-cluster
/// state (field, path finder, casualty set) is owned by the loop body and
/// dropped once its metrics are extracted.
pub struct Mission {
    config: MissionConfig,
    grid: HexGrid,
    scenario: Scenario,
    cluster_finder: Option<Box<dyn ClusterFinder>>,
    path_finder_factory: Option<PathFinderFactory>,
}

impl Mission {
    /// Build the grid and generate the scenario from the config's seed.
    pub fn new(config: MissionConfig) -> MissionResult<Self> {
        let grid = HexGrid::new(config.center, config.resolution)?;
        let mut master = SarRng::new(config.seed);
        let scenario =
            Scenario::generate(&config, &grid, &mut master.child(SCENARIO_STREAM));
        Ok(Self {
            config,
            grid,
            scenario,
            cluster_finder: None,
            path_finder_factory: None,
        })
    }

    /// The generated scenario — cluster finders are usually built from its
    /// hotspot list.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn register_cluster_finder(&mut self, finder: Box<dyn ClusterFinder>) {
        self.cluster_finder = Some(finder);
    }

    pub fn register_path_finder(&mut self, factory: PathFinderFactory) {
        self.path_finder_factory = Some(factory);
    }

    /// Execute the run.
    ///
    /// Strategy errors abort the whole run.  A collapsed probability field
    /// aborts only that cluster's search; the cluster keeps its distance
    /// metrics and the run continues.
    pub fn run(&mut self) -> MissionResult<MissionReport> {
        let finder = self
            .cluster_finder
            .as_mut()
            .ok_or(MissionError::NotConfigured("cluster finder"))?;
        if !self.config.only_cluster && self.path_finder_factory.is_none() {
            return Err(MissionError::NotConfigured("path finder factory"));
        }

        let clusters = finder.fit()?;
        let searched = self.searched_clusters(&clusters);

        let mut simulator = SearchSimulator::new(
            self.config.simulator_config(),
            DetectionModel::new(self.config.detection_failure_one_in),
        );
        let mut master = SarRng::new(self.config.seed);

        let mut report: BTreeMap<ClusterId, ClusterMetrics> = BTreeMap::new();
        for (&id, members) in &clusters {
            let coords: Vec<GeoPoint> = members.iter().map(|p| p.coords).collect();
            let centre = spherical_centroid(&coords)?;
            let mut metrics = evaluate_cluster(members, centre);

            if searched.contains(&id) {
                let mut rng = master.child(DETECTION_STREAM + u64::from(id.0));
                metrics.search = self
                    .search_cluster(&mut simulator, members, centre, &mut rng)?
                    .map(|(field, casualties, output)| {
                        evaluate_search(&field, &casualties, &output)
                    });
            }
            report.insert(id, metrics);
        }

        let aggregate = RunMetrics::aggregate(report.values(), self.scenario.casualties.len());
        Ok(MissionReport { clusters: report, aggregate })
    }

    /// Which clusters get a search phase under the config's policy flags.
    fn searched_clusters(
        &self,
        clusters: &BTreeMap<ClusterId, Vec<Point>>,
    ) -> BTreeSet<ClusterId> {
        if self.config.only_cluster {
            return BTreeSet::new();
        }
        if self.config.only_path {
            // Most populous cluster; BTreeMap order breaks ties toward the
            // lowest ID.
            return clusters
                .iter()
                .max_by(|(ia, a), (ib, b)| a.len().cmp(&b.len()).then(ib.cmp(ia)))
                .map(|(&id, _)| BTreeSet::from([id]))
                .unwrap_or_default();
        }
        clusters.keys().copied().collect()
    }

    /// Build the cluster's field and run its search.
    ///
    /// `Ok(None)` means the field collapsed; the caller records the cluster
    /// without search metrics.
    #[allow(clippy::type_complexity)]
    fn search_cluster(
        &self,
        simulator: &mut SearchSimulator,
        members: &[Point],
        centre: GeoPoint,
        rng: &mut SarRng,
    ) -> MissionResult<Option<(ProbabilityField, BTreeSet<CellId>, sar_sim::SearchOutput)>> {
        let center_cell = self.grid.to_cell(centre);
        let mut field =
            ProbabilityField::initialize(&self.grid, center_cell, self.config.ring_count);

        for member in members {
            let hotspot_cell = self.grid.to_cell(member.coords);
            match field.inject_hotspot(
                &self.grid,
                hotspot_cell,
                self.config.sigma,
                self.config.max_ring_radius,
            ) {
                Ok(()) => {}
                Err(FieldError::Collapsed) => return Ok(None),
                Err(e) => return Err(MissionError::Sim(SimError::Field(e))),
            }
        }

        let member_ids: BTreeSet<_> = members.iter().map(|p| p.id).collect();
        let casualties: BTreeSet<CellId> = self
            .scenario
            .casualties
            .iter()
            .filter(|c| member_ids.contains(&c.hotspot))
            .map(|c| c.cell)
            .collect();

        let factory = self
            .path_finder_factory
            .as_ref()
            .ok_or(MissionError::NotConfigured("path finder factory"))?;
        simulator.register_path_finder(factory(self.config.resolution, centre));

        match simulator.run(&self.grid, &mut field, centre, &casualties, rng) {
            Ok(output) => Ok(Some((field, casualties, output))),
            Err(SimError::Field(FieldError::Collapsed)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
