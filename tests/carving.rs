use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seamcarver::{SeamCarver, SeamError, BORDER_ENERGY};

fn noise(rng: &mut StdRng, width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |_, _| {
        Rgb([rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()])
    })
}

fn assert_connected(seam: &[u32], len: u32, bound: u32) {
    assert_eq!(seam.len(), len as usize);
    assert!(seam.iter().all(|&i| i < bound), "{:?} leaves 0..{}", seam, bound);
    assert!(
        seam.windows(2).all(|w| w[0].abs_diff(w[1]) <= 1),
        "{:?} is not connected",
        seam
    );
}

#[test]
fn borders_are_pinned_on_random_images() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let (w, h) = (rng.random_range(1..12), rng.random_range(1..12));
        let carver = SeamCarver::new(noise(&mut rng, w, h)).unwrap();
        for x in 0..w {
            assert_eq!(carver.energy(x, 0), Ok(BORDER_ENERGY));
            assert_eq!(carver.energy(x, h - 1), Ok(BORDER_ENERGY));
        }
        for y in 0..h {
            assert_eq!(carver.energy(0, y), Ok(BORDER_ENERGY));
            assert_eq!(carver.energy(w - 1, y), Ok(BORDER_ENERGY));
        }
        assert!(matches!(
            carver.energy(w, 0),
            Err(SeamError::OutOfRange { .. })
        ));
    }
}

#[test]
fn seams_are_connected_and_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let (w, h) = (rng.random_range(1..16), rng.random_range(1..16));
        let mut carver = SeamCarver::new(noise(&mut rng, w, h)).unwrap();
        assert_connected(&carver.find_vertical_seam(), h, w);
        assert_connected(&carver.find_horizontal_seam(), w, h);
    }
}

#[test]
fn vertical_seam_matches_brute_force_cost() {
    // Enumerate every connected path through a small image and compare
    // the cheapest one with what the carver found.
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..10 {
        let (w, h) = (rng.random_range(1..6), rng.random_range(1..6));
        let carver = SeamCarver::new(noise(&mut rng, w, h)).unwrap();
        let cost = |seam: &[u32]| -> f64 {
            seam.iter()
                .enumerate()
                .map(|(y, &x)| carver.energy(x, y as u32).unwrap())
                .sum()
        };

        let mut best = f64::INFINITY;
        let mut paths: Vec<Vec<u32>> = (0..w).map(|x| vec![x]).collect();
        for _ in 1..h {
            paths = paths
                .into_iter()
                .flat_map(|path| {
                    let last = *path.last().unwrap();
                    (last.saturating_sub(1)..=(last + 1).min(w - 1)).map(move |x| {
                        let mut next = path.clone();
                        next.push(x);
                        next
                    })
                })
                .collect();
        }
        for path in &paths {
            best = best.min(cost(path));
        }

        let seam = carver.find_vertical_seam();
        assert!((cost(&seam) - best).abs() < 1e-9);
    }
}

#[test]
fn carving_random_images_down_keeps_rows_intact() {
    let mut rng = StdRng::seed_from_u64(17);
    let original = noise(&mut rng, 9, 7);
    let mut carver = SeamCarver::new(original.clone()).unwrap();

    let seam = carver.find_vertical_seam();
    carver.remove_vertical_seam(&seam).unwrap();
    assert_eq!((carver.width(), carver.height()), (8, 7));
    for y in 0..7 {
        let kept: Vec<_> = (0..9)
            .filter(|&x| x != seam[y as usize])
            .map(|x| *original.get_pixel(x, y))
            .collect();
        let row: Vec<_> = (0..8).map(|x| *carver.picture().get_pixel(x, y)).collect();
        assert_eq!(row, kept);
    }

    carver.carve(3, 2).unwrap();
    assert_eq!(carver.into_picture().dimensions(), (3, 2));
}

#[test]
fn shrinking_to_a_single_column_then_stopping() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut carver = SeamCarver::new(noise(&mut rng, 4, 3)).unwrap();
    for _ in 0..3 {
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam).unwrap();
    }
    assert_eq!(carver.width(), 1);
    assert_eq!(carver.find_vertical_seam(), vec![0, 0, 0]);
    assert!(matches!(
        carver.remove_vertical_seam(&[0, 0, 0]),
        Err(SeamError::InvalidArgument(_))
    ));

    for _ in 0..2 {
        let seam = carver.find_horizontal_seam();
        carver.remove_horizontal_seam(&seam).unwrap();
    }
    assert_eq!((carver.width(), carver.height()), (1, 1));
    assert!(carver.remove_horizontal_seam(&[0]).is_err());
}
