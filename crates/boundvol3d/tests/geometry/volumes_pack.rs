use boundvol3d::bounding_volume::{BoundingVolumes, BoundingVolumesData, PACKED_FLOAT_COUNT};
use boundvol3d::math::{Point, Real};

fn random_volumes(rng: &mut oorandom::Rand32) -> BoundingVolumes {
    let pts: Vec<Point> = (0..16)
        .map(|_| {
            Point::new(
                rng.rand_float() * 10.0,
                rng.rand_float() * 4.0 - 2.0,
                rng.rand_float() - 5.0,
            )
        })
        .collect();
    let mut volumes = BoundingVolumes::empty();
    assert!(volumes.set_from_points(&pts));
    volumes
}

fn bits(floats: &[Real; PACKED_FLOAT_COUNT]) -> Vec<u32> {
    floats.iter().map(|f| f.to_bits()).collect()
}

#[test]
fn pack_unpack_is_bit_exact() {
    let mut rng = oorandom::Rand32::new(2024);

    for _ in 0..50 {
        let volumes = random_volumes(&mut rng);
        let data = volumes.pack();
        let restored = BoundingVolumes::from(&data);

        assert_eq!(restored, volumes);
        assert_eq!(bits(&restored.pack().to_array()), bits(&data.to_array()));
    }
}

#[test]
fn bytes_round_trip() {
    let mut rng = oorandom::Rand32::new(7);
    let volumes = random_volumes(&mut rng);
    let data = BoundingVolumesData::from(&volumes);
    let bytes = data.as_bytes().to_vec();

    assert_eq!(bytes.len(), PACKED_FLOAT_COUNT * size_of::<Real>());
    assert_eq!(BoundingVolumesData::from_bytes(&bytes), Ok(data));
    assert!(BoundingVolumesData::from_bytes(&bytes[..100]).is_err());
}

#[test]
fn empty_volumes_survive_packing() {
    let restored = BoundingVolumes::empty().pack().to_volumes();

    assert!(restored.is_empty());
    assert!(restored.bsphere.radius < 0.0);
}
