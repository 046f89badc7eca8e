//! Boots with an empty Ignition config.
//!
//! The machine must still come up reachable, which means the platform has to
//! supply the SSH key itself (EC2 metadata on AWS, project metadata on GCE)
//! since the config does not inject one.

use semver::Version;
use shakedown_catalog::{Registry, TestCluster, TestDeclaration, register_tests};

pub const AWS: &str = "coreos.ignition.v1.empty.aws";
pub const GCE: &str = "coreos.ignition.v1.empty.gce";

pub(crate) fn register(registry: &mut Registry) -> shakedown_catalog::Result<()> {
    registry.register(
        TestDeclaration::builder()
            .name(AWS)
            .run(empty)
            .cluster_size(1)
            .platforms(["aws"])
            .build(),
    )?;

    registry.register(
        TestDeclaration::builder()
            .name(GCE)
            .run(empty)
            .cluster_size(1)
            .platforms(["gce"])
            .min_version(Version::new(1045, 0, 0))
            .build(),
    )
}

register_tests!(register);

fn empty(_: &dyn TestCluster) {}
