//! Feature chains composed the way a simulation would wire them up.

use std::sync::Arc;

use aether_core::units::{EEV, MPC};
use aether_core::{pdg, Vector3};
use aether_cosmo::Cosmology;
use aether_source::{
    Emitter, Source, SourceError, SourceIsotropicEmission, SourceList,
    SourceMultipleParticleTypes, SourcePosition, SourcePowerLawSpectrum, SourceRedshift1D,
    SourceUniformRedshift, SourceUniformSphere,
};
use aether_test_utils::seeded_rng;

fn astrophysical_source() -> Source {
    let mut types = SourceMultipleParticleTypes::new();
    types.add(pdg::PROTON, 9.0).unwrap();
    types.add(pdg::PHOTON, 1.0).unwrap();

    let mut source = Source::new();
    source.add(Box::new(types)).unwrap();
    source
        .add(Box::new(
            SourcePowerLawSpectrum::new(0.1 * EEV, 10.0 * EEV, -2.0).unwrap(),
        ))
        .unwrap();
    source
        .add(Box::new(SourceUniformSphere::new(Vector3::ZERO, 100.0 * MPC)))
        .unwrap();
    source.add(Box::new(SourceIsotropicEmission)).unwrap();
    source
        .add(Box::new(SourceUniformRedshift::new(0.0, 2.0).unwrap()))
        .unwrap();
    source
}

#[test]
fn a_full_chain_emits_well_formed_candidates() {
    let source = astrophysical_source();
    let mut rng = seeded_rng(11);

    let mut protons = 0u32;
    for _ in 0..500 {
        let c = source.candidate(&mut rng).unwrap();

        let id = c.current.id();
        assert!(id == pdg::PROTON || id == pdg::PHOTON);
        if id == pdg::PROTON {
            protons += 1;
        }

        let e = c.current.energy();
        assert!((0.1 * EEV..=10.0 * EEV).contains(&e));

        assert!(c.current.position().norm() <= 100.0 * MPC);
        assert!((c.current.direction().norm() - 1.0).abs() < 1e-12);
        assert!((0.0..=2.0).contains(&c.redshift()));
        assert!(c.is_active());
    }
    // 9:1 type weighting.
    assert!(protons > 400);
}

#[test]
fn emission_snapshots_match_the_prepared_state() {
    let source = astrophysical_source();
    let mut rng = seeded_rng(3);
    let c = source.candidate(&mut rng).unwrap();

    assert_eq!(c.source.position(), c.current.position());
    assert_eq!(c.source.energy(), c.current.energy());
    assert_eq!(c.previous.position(), c.current.position());
    assert_eq!(c.trajectory_length(), 0.0);
    assert!(c.next_step().is_infinite());
}

#[test]
fn redshift_from_distance_follows_the_position_feature() {
    let cosmology = Arc::new(Cosmology::default());
    let d = 100.0 * MPC;

    let mut source = Source::new();
    source
        .add(Box::new(SourcePosition::new(Vector3::new(d, 0.0, 0.0))))
        .unwrap();
    source
        .add(Box::new(SourceRedshift1D::new(Arc::clone(&cosmology))))
        .unwrap();

    let mut rng = seeded_rng(17);
    let c = source.candidate(&mut rng).unwrap();
    let expected = cosmology.comoving_distance_to_redshift(d);
    assert!((c.redshift() - expected).abs() < 1e-9);
}

#[test]
fn redshift_from_distance_rejects_a_chain_without_position() {
    let mut source = Source::new();
    let err = source
        .add(Box::new(SourceRedshift1D::new(Arc::new(
            Cosmology::default(),
        ))))
        .unwrap_err();
    assert!(matches!(err, SourceError::PositionOrdering { .. }));
}

#[test]
fn source_lists_mix_sub_sources_by_weight() {
    let mut near = Source::new();
    near.add(Box::new(SourcePosition::new(Vector3::new(
        10.0 * MPC,
        0.0,
        0.0,
    ))))
    .unwrap();
    let mut far = Source::new();
    far.add(Box::new(SourcePosition::new(Vector3::new(
        90.0 * MPC,
        0.0,
        0.0,
    ))))
    .unwrap();

    let mut list = SourceList::new();
    list.add(Box::new(near), 3.0).unwrap();
    list.add(Box::new(far), 1.0).unwrap();

    let mut rng = seeded_rng(29);
    let mut from_near = 0u32;
    let total = 2000u32;
    for _ in 0..total {
        let c = list.candidate(&mut rng).unwrap();
        if c.current.position().x < 50.0 * MPC {
            from_near += 1;
        }
    }
    let fraction = f64::from(from_near) / f64::from(total);
    assert!((fraction - 0.75).abs() < 0.05, "near fraction {fraction}");
}
