//! Sections: the regions of the sphere partition
//!
//! A section is the intersection of the half-spaces in its side map. While the
//! partition is being built it is described by references into the
//! [`CircleSet`] intersection table (its corner points). Finalization turns
//! those references into an ordered polygon and fans it into triangles.
//!
//! Lifecycle:
//!
//! 1. *active*: boundary references, no polygon. Each new circle either lifts
//!    the section (all corners on the positive side), leaves it alone (all on
//!    the negative side), or splits it in two.
//! 2. *finalized*: polygon vertices sorted around the centroid, boundary
//!    references dropped.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use glam::DVec3;

use crate::config::TextureId;
use crate::error::{Result, WorldGenError};
use crate::generation::circles::{CircleSet, IntersectionRef, PairKey, Side};
use crate::sphere::{bearing, polygon_contains, tangent_basis, Pole, UnitVector};

/// A region of the sphere partition
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    sides: BTreeMap<usize, Side>,
    boundary: Vec<IntersectionRef>,
    height: u32,
    center: Option<UnitVector>,
    polygon: Vec<UnitVector>,
    texture: Option<TextureId>,
    pole: Option<Pole>,
}

impl Section {
    /// Build a section from its half-space map, corner references and height
    pub fn from_parts(
        sides: BTreeMap<usize, Side>,
        boundary: Vec<IntersectionRef>,
        height: u32,
    ) -> Self {
        Self {
            sides,
            boundary,
            height,
            center: None,
            polygon: Vec::new(),
            texture: None,
            pole: None,
        }
    }

    /// One half of the sphere, bounded by a single circle
    pub(crate) fn hemisphere(circle: usize, side: Side, height: u32) -> Self {
        Self::from_parts(BTreeMap::from([(circle, side)]), Vec::new(), height)
    }

    /// Half-space map: bounding circle index to side
    #[inline]
    pub fn sides(&self) -> &BTreeMap<usize, Side> {
        &self.sides
    }

    /// Corner references (empty once finalized)
    #[inline]
    pub fn boundary(&self) -> &[IntersectionRef] {
        &self.boundary
    }

    /// Number of circles this section sits on the positive side of
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Centroid, once computed
    #[inline]
    pub fn center(&self) -> Option<UnitVector> {
        self.center
    }

    /// Ordered polygon vertices (empty until finalized)
    #[inline]
    pub fn polygon(&self) -> &[UnitVector] {
        &self.polygon
    }

    /// Texture id, `None` for ocean
    #[inline]
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// Pole contained by this section, detected during finalization
    #[inline]
    pub fn pole(&self) -> Option<Pole> {
        self.pole
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        !self.polygon.is_empty()
    }

    pub(crate) fn set_texture(&mut self, texture: Option<TextureId>) {
        self.texture = texture;
    }

    /// Update this section for a newly placed circle
    ///
    /// Returns the sibling section when the circle splits this one. The part on
    /// the circle's positive side stays in `self` with its height incremented;
    /// the sibling takes the negative part at the previous height.
    pub fn intersect_with_great_circle(
        &mut self,
        circle: usize,
        circles: &CircleSet,
    ) -> Result<Option<Section>> {
        if self.boundary.is_empty() {
            return self.bisect(circle, circles).map(Some);
        }

        let normal = circles.normal(circle)?;
        let mut over = Vec::new();
        let mut under = Vec::new();
        for &reference in &self.boundary {
            let point = circles.resolve(reference)?;
            match Side::of(&point, &normal) {
                Side::Positive => over.push(reference),
                Side::Negative => under.push(reference),
            }
        }

        if under.is_empty() {
            self.height += 1;
            return Ok(None);
        }
        if over.is_empty() {
            return Ok(None);
        }

        let over_circles = cited_circles(&over);
        let under_circles = cited_circles(&under);

        let mut crossings = Vec::new();
        for &shared in over_circles.intersection(&under_circles) {
            crossings.push(self.crossing_point(shared, circle, circles)?);
        }

        let lower_sides = self.retained_sides(&under_circles, circle, Side::Negative);
        under.extend(crossings.iter().copied());
        let sibling = Section::from_parts(lower_sides, under, self.height);

        self.sides = self.retained_sides(&over_circles, circle, Side::Positive);
        over.extend(crossings);
        self.boundary = over;
        self.height += 1;
        self.center = None;

        Ok(Some(sibling))
    }

    /// Split a cornerless hemisphere with the second circle
    fn bisect(&mut self, circle: usize, circles: &CircleSet) -> Result<Section> {
        let anchor = *self.sides.keys().next().ok_or(WorldGenError::EmptySection)?;
        let corner = IntersectionRef::new(PairKey::new(anchor, circle), Side::Positive);
        circles.resolve(corner)?;

        self.boundary = vec![corner, corner.antipode()];
        self.center = None;

        let mut sibling_sides = self.sides.clone();
        sibling_sides.insert(circle, Side::Negative);
        self.sides.insert(circle, Side::Positive);

        Ok(Section::from_parts(
            sibling_sides,
            self.boundary.clone(),
            self.height,
        ))
    }

    /// Pick the intersection of `shared` and `circle` that lies on this section's edge
    ///
    /// The canonical point is kept unless some other bounding circle rejects it.
    fn crossing_point(
        &self,
        shared: usize,
        circle: usize,
        circles: &CircleSet,
    ) -> Result<IntersectionRef> {
        let candidate = IntersectionRef::new(PairKey::new(shared, circle), Side::Positive);
        let point = circles.resolve(candidate)?;

        for (&other, &side) in &self.sides {
            if other == shared {
                continue;
            }
            if !side.admits(&point, &circles.normal(other)?) {
                return Ok(candidate.antipode());
            }
        }
        Ok(candidate)
    }

    fn retained_sides(
        &self,
        retained: &BTreeSet<usize>,
        circle: usize,
        side: Side,
    ) -> BTreeMap<usize, Side> {
        let mut sides: BTreeMap<usize, Side> = self
            .sides
            .iter()
            .filter(|(index, _)| retained.contains(index))
            .map(|(&index, &side)| (index, side))
            .collect();
        sides.insert(circle, side);
        sides
    }

    /// Compute and cache the centroid
    ///
    /// Averages the polygon vertices if finalized, the resolved corners
    /// otherwise. A lune's two corners are antipodal and cancel out; its
    /// centroid is then the normalized sum of its signed bounding normals.
    pub fn set_center_coordinates(&mut self, circles: &CircleSet) -> Result<UnitVector> {
        let sum: DVec3 = if !self.polygon.is_empty() {
            self.polygon.iter().map(|v| v.xyz()).sum()
        } else if !self.boundary.is_empty() {
            let mut sum = DVec3::ZERO;
            for &reference in &self.boundary {
                sum += circles.resolve(reference)?.xyz();
            }
            sum
        } else {
            return Err(WorldGenError::EmptySection);
        };

        let center = match UnitVector::from_vec(sum) {
            Some(center) => center,
            None => self.signed_normal_center(circles)?,
        };
        self.center = Some(center);
        Ok(center)
    }

    fn signed_normal_center(&self, circles: &CircleSet) -> Result<UnitVector> {
        let mut sum = DVec3::ZERO;
        for (&index, &side) in &self.sides {
            sum += circles.normal(index)?.xyz() * side.sign();
        }
        UnitVector::from_vec(sum).ok_or_else(|| self.degenerate())
    }

    fn degenerate(&self) -> WorldGenError {
        WorldGenError::DegenerateSection {
            circles: self.sides.keys().copied().collect(),
        }
    }

    /// Whether `pole` satisfies every bounding circle's side test
    pub fn contains_pole(&self, pole: Pole, circles: &CircleSet) -> Result<bool> {
        let point = pole.vector();
        for (&index, &side) in &self.sides {
            if !side.admits(&point, &circles.normal(index)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether `point` lies inside this section
    ///
    /// Every bounding circle must admit the point; finalized sections also
    /// require it to be inside the polygon.
    pub fn contains(&self, point: &UnitVector, circles: &CircleSet) -> Result<bool> {
        for (&index, &side) in &self.sides {
            if !side.admits(point, &circles.normal(index)?) {
                return Ok(false);
            }
        }

        match self.center {
            Some(center) if self.polygon.len() >= 3 => {
                Ok(polygon_contains(&self.polygon, center.xyz(), point.xyz()))
            }
            _ => Ok(true),
        }
    }

    /// Turn this section into its output triangles
    ///
    /// Resolves the corners into a sorted polygon. A plain triangle is returned
    /// as-is; anything else (including every pole section) is fanned around its
    /// centroid, or around the pole it contains, into one triangle per edge.
    pub fn finalize_polygon(&mut self, circles: &CircleSet) -> Result<Vec<Section>> {
        let center = self.set_center_coordinates(circles)?;

        let north = self.contains_pole(Pole::North, circles)?;
        let south = self.contains_pole(Pole::South, circles)?;
        self.pole = match (north, south) {
            (true, true) => {
                return Err(WorldGenError::PoleConflict {
                    circles: self.sides.keys().copied().collect(),
                })
            }
            (true, false) => Some(Pole::North),
            (false, true) => Some(Pole::South),
            (false, false) => None,
        };

        if !self.boundary.is_empty() {
            let mut polygon = Vec::with_capacity(self.boundary.len() + 2);
            for &reference in &self.boundary {
                polygon.push(circles.resolve(reference)?);
            }
            if polygon.len() < 3 {
                // Lune: split each 180 degree edge at its midpoint
                for index in cited_circles(&self.boundary) {
                    let normal = circles.normal(index)?.xyz();
                    let midpoint = center.xyz() - normal * center.xyz().dot(normal);
                    polygon.push(UnitVector::from_vec(midpoint).ok_or_else(|| self.degenerate())?);
                }
            }
            self.polygon = polygon;
            self.boundary.clear();
        }

        if let Some(pole) = self.pole {
            self.center = Some(pole.vector());
        }
        self.sort_polygon_vertices();

        if self.polygon.len() == 3 && self.pole.is_none() {
            return Ok(vec![self.clone()]);
        }
        Ok(self.fan_triangles())
    }

    /// Order polygon vertices by descending bearing around the centroid
    ///
    /// Bearings are taken in the tangent frame at the centroid, so polygons
    /// crossing the 0/360 meridian need no special handling. Does nothing
    /// before a centroid has been computed.
    pub fn sort_polygon_vertices(&mut self) {
        let Some(center) = self.center else {
            return;
        };
        let basis = tangent_basis(center.xyz());

        let mut keyed: Vec<(f64, UnitVector)> = self
            .polygon
            .iter()
            .map(|v| (bearing(basis, v.xyz()), *v))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

        self.polygon = keyed.into_iter().map(|(_, v)| v).collect();
    }

    fn fan_triangles(&self) -> Vec<Section> {
        let Some(apex) = self.center else {
            return Vec::new();
        };
        let count = self.polygon.len();

        (0..count)
            .map(|i| {
                let vertices = vec![self.polygon[i], self.polygon[(i + 1) % count], apex];
                let sum: DVec3 = vertices.iter().map(|v| v.xyz()).sum();
                Section {
                    sides: self.sides.clone(),
                    boundary: Vec::new(),
                    height: self.height,
                    center: Some(UnitVector::from_vec(sum).unwrap_or(apex)),
                    polygon: vertices,
                    texture: None,
                    pole: None,
                }
            })
            .collect()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "height={} sides=[", self.height)?;
        for (i, (index, side)) in self.sides.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let sign = match side {
                Side::Positive => '+',
                Side::Negative => '-',
            };
            write!(f, "{}{}", index, sign)?;
        }
        write!(f, "] boundary=[")?;
        for (i, reference) in self.boundary.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", reference.pair, if reference.side == Side::Positive { '+' } else { '-' })?;
        }
        write!(f, "] vertices={}", self.polygon.len())?;
        if let Some(center) = self.center {
            write!(f, " center=({:.3}, {:.3})", center.lat(), center.lon())?;
        }
        Ok(())
    }
}

/// Circles referenced by a set of corners
fn cited_circles(references: &[IntersectionRef]) -> BTreeSet<usize> {
    references
        .iter()
        .flat_map(|reference| reference.pair.circles())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn unit(x: f64, y: f64, z: f64) -> UnitVector {
        UnitVector::from_xyz(x, y, z).unwrap()
    }

    /// Octant x, y, z >= 0 bounded by the three coordinate planes
    fn octant() -> (CircleSet, Section) {
        let mut circles = CircleSet::new();
        circles.push(unit(1.0, 0.0, 0.0)).unwrap();
        circles.push(unit(0.0, 1.0, 0.0)).unwrap();
        circles.push(unit(0.0, 0.0, 1.0)).unwrap();

        let sides = BTreeMap::from([(0, Side::Positive), (1, Side::Positive), (2, Side::Positive)]);
        let boundary = vec![
            IntersectionRef::new(PairKey::new(0, 1), Side::Positive), // +Z
            IntersectionRef::new(PairKey::new(0, 2), Side::Negative), // +Y
            IntersectionRef::new(PairKey::new(1, 2), Side::Positive), // +X
        ];
        (circles, Section::from_parts(sides, boundary, 3))
    }

    /// Small triangle around `axis`, bounded by three circles tilted towards it
    fn triangle_around(axis: DVec3, tangents: [DVec3; 3]) -> (CircleSet, Section) {
        let mut circles = CircleSet::new();
        for tangent in tangents {
            circles
                .push(UnitVector::from_vec(axis * 0.2 + tangent).unwrap())
                .unwrap();
        }

        let mut boundary = Vec::new();
        for (i, j, k) in [(0, 1, 2), (0, 2, 1), (1, 2, 0)] {
            let corner = IntersectionRef::new(PairKey::new(i, j), Side::Positive);
            let point = circles.resolve(corner).unwrap();
            let normal = circles.normal(k).unwrap();
            boundary.push(if point.dot(&normal) >= 0.0 {
                corner
            } else {
                corner.antipode()
            });
        }

        let sides = BTreeMap::from([(0, Side::Positive), (1, Side::Positive), (2, Side::Positive)]);
        (circles, Section::from_parts(sides, boundary, 2))
    }

    fn equatorial_triangle() -> (CircleSet, Section) {
        triangle_around(
            DVec3::X,
            [
                DVec3::Y,
                DVec3::new(0.0, -0.5, 0.866),
                DVec3::new(0.0, -0.5, -0.866),
            ],
        )
    }

    fn polar_triangle() -> (CircleSet, Section) {
        triangle_around(
            DVec3::Z,
            [
                DVec3::X,
                DVec3::new(-0.5, 0.866, 0.0),
                DVec3::new(-0.5, -0.866, 0.0),
            ],
        )
    }

    #[test]
    fn test_hemisphere_bisected_by_second_circle() {
        let mut circles = CircleSet::new();
        circles.push(unit(1.0, 0.2, 0.1)).unwrap();
        circles.push(unit(0.1, 1.0, -0.3)).unwrap();

        let mut upper = Section::hemisphere(0, Side::Positive, 1);
        let lower = upper
            .intersect_with_great_circle(1, &circles)
            .unwrap()
            .expect("a cornerless hemisphere is always bisected");

        assert_eq!(upper.height(), 1);
        assert_eq!(lower.height(), 1);
        assert_eq!(upper.sides()[&1], Side::Positive);
        assert_eq!(lower.sides()[&1], Side::Negative);
        assert_eq!(upper.sides()[&0], Side::Positive);
        assert_eq!(lower.sides()[&0], Side::Positive);
        assert_eq!(upper.boundary().len(), 2);
        assert_eq!(upper.boundary(), lower.boundary());
        assert_eq!(upper.boundary()[0], upper.boundary()[1].antipode());
    }

    #[test]
    fn test_all_corners_over_raises_height() {
        let (mut circles, mut section) = octant();
        let circle = circles.push(unit(1.0, 1.0, 1.0)).unwrap();
        let before = section.clone();

        let sibling = section.intersect_with_great_circle(circle, &circles).unwrap();
        assert!(sibling.is_none());
        assert_eq!(section.height(), 4);
        assert_eq!(section.sides(), before.sides());
        assert_eq!(section.boundary(), before.boundary());
    }

    #[test]
    fn test_all_corners_under_is_untouched() {
        let (mut circles, mut section) = octant();
        let circle = circles.push(unit(-1.0, -1.0, -1.0)).unwrap();
        let before = section.clone();

        let sibling = section.intersect_with_great_circle(circle, &circles).unwrap();
        assert!(sibling.is_none());
        assert_eq!(section, before);
    }

    #[test]
    fn test_mixed_corners_split_section() {
        let (mut circles, mut section) = octant();
        let circle = circles.push(unit(1.0, 1.0, -1.0)).unwrap();

        let sibling = section
            .intersect_with_great_circle(circle, &circles)
            .unwrap()
            .expect("circle crosses the octant");

        // Upper part keeps X and Y plus two new corners
        assert_eq!(section.height(), 4);
        assert_eq!(section.boundary().len(), 4);
        assert_eq!(section.sides().len(), 4);
        assert_eq!(section.sides()[&3], Side::Positive);

        // Lower part is the small triangle around Z, which no longer touches z = 0
        assert_eq!(sibling.height(), 3);
        assert_eq!(sibling.boundary().len(), 3);
        assert_eq!(
            sibling.sides(),
            &BTreeMap::from([(0, Side::Positive), (1, Side::Positive), (3, Side::Negative)])
        );

        // Crossing on x = 0 is canonical, crossing on y = 0 needs the antipode
        assert!(sibling
            .boundary()
            .contains(&IntersectionRef::new(PairKey::new(0, 3), Side::Positive)));
        assert!(sibling
            .boundary()
            .contains(&IntersectionRef::new(PairKey::new(1, 3), Side::Negative)));

        for reference in sibling.boundary() {
            let point = circles.resolve(*reference).unwrap();
            assert!(point.x() >= -1e-12 && point.y() >= -1e-12 && point.z() >= -1e-12);
        }
    }

    #[test]
    fn test_center_of_empty_section_fails() {
        let circles = CircleSet::new();
        let mut section = Section::from_parts(BTreeMap::new(), Vec::new(), 0);
        assert_eq!(
            section.set_center_coordinates(&circles),
            Err(WorldGenError::EmptySection)
        );
    }

    #[test]
    fn test_single_circle_hemisphere_cannot_finalize() {
        let mut circles = CircleSet::new();
        circles.push(unit(0.3, 0.4, 0.5)).unwrap();
        let mut section = Section::hemisphere(0, Side::Positive, 1);
        assert_eq!(
            section.finalize_polygon(&circles),
            Err(WorldGenError::EmptySection)
        );
    }

    #[test]
    fn test_lune_center_uses_bounding_normals() {
        let mut circles = CircleSet::new();
        circles.push(unit(1.0, 0.0, 0.0)).unwrap();
        circles.push(unit(0.0, 1.0, 0.0)).unwrap();

        let mut section = Section::hemisphere(0, Side::Positive, 1);
        section.intersect_with_great_circle(1, &circles).unwrap();
        let center = section.set_center_coordinates(&circles).unwrap();

        let expected = unit(1.0, 1.0, 0.0);
        assert!(center.distance(&expected) < 1e-9);
    }

    #[test]
    fn test_both_poles_inside_is_fatal() {
        // Both bounding normals lie in the equatorial plane, so each pole passes
        // every side test.
        let mut circles = CircleSet::new();
        circles.push(unit(1.0, 0.0, 0.0)).unwrap();
        circles.push(unit(0.0, 1.0, 0.0)).unwrap();

        let corner = IntersectionRef::new(PairKey::new(0, 1), Side::Positive);
        let mut section = Section::from_parts(
            BTreeMap::from([(0, Side::Positive), (1, Side::Positive)]),
            vec![corner, corner.antipode()],
            1,
        );

        assert_eq!(
            section.finalize_polygon(&circles),
            Err(WorldGenError::PoleConflict { circles: vec![0, 1] })
        );
    }

    #[test]
    fn test_plain_triangle_is_kept() {
        let (circles, mut section) = equatorial_triangle();
        let leaves = section.finalize_polygon(&circles).unwrap();

        assert_eq!(leaves.len(), 1);
        let leaf = &leaves[0];
        assert!(leaf.is_finalized());
        assert!(leaf.boundary().is_empty());
        assert_eq!(leaf.polygon().len(), 3);
        assert_eq!(leaf.pole(), None);
        assert_eq!(leaf.height(), 2);

        let x = unit(1.0, 0.0, 0.0);
        assert!(leaf.center().unwrap().dot(&x) > 0.9);
        assert!(leaf.contains(&x, &circles).unwrap());
        assert!(!leaf.contains(&-x, &circles).unwrap());
        assert!(!leaf.contains(&UnitVector::NORTH_POLE, &circles).unwrap());
    }

    #[test]
    fn test_polar_triangle_is_fanned_around_pole() {
        let (circles, mut section) = polar_triangle();
        let leaves = section.finalize_polygon(&circles).unwrap();

        assert_eq!(section.pole(), Some(Pole::North));
        assert_eq!(section.center(), Some(UnitVector::NORTH_POLE));
        assert_eq!(leaves.len(), 3);
        for leaf in &leaves {
            assert_eq!(leaf.polygon().len(), 3);
            assert_eq!(leaf.polygon()[2], UnitVector::NORTH_POLE);
        }

        // A point near the pole belongs to exactly one fan triangle
        let probe = UnitVector::from_lat_lon(89.0, 37.0);
        let hits = leaves
            .iter()
            .filter(|leaf| leaf.contains(&probe, &circles).unwrap())
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let (circles, mut section) = polar_triangle();
        section.finalize_polygon(&circles).unwrap();

        let first = section.polygon().to_vec();
        section.sort_polygon_vertices();
        assert_eq!(section.polygon(), first.as_slice());

        let mut reversed = section.clone();
        reversed.polygon.reverse();
        reversed.sort_polygon_vertices();
        assert_eq!(reversed.polygon(), first.as_slice());
    }

    #[test]
    fn test_sort_follows_descending_bearing() {
        let (circles, mut section) = equatorial_triangle();
        section.finalize_polygon(&circles).unwrap();

        let basis = tangent_basis(section.center().unwrap().xyz());
        let bearings: Vec<f64> = section
            .polygon()
            .iter()
            .map(|v| bearing(basis, v.xyz()))
            .collect();
        assert!(bearings.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_lunes_partition_the_sphere() {
        let mut circles = CircleSet::new();
        circles.push(unit(1.0, 0.2, 0.1)).unwrap();
        circles.push(unit(0.1, 1.0, -0.3)).unwrap();

        let mut active = vec![
            Section::hemisphere(0, Side::Positive, 1),
            Section::hemisphere(0, Side::Negative, 0),
        ];
        let mut pending = Vec::new();
        for section in &mut active {
            if let Some(sibling) = section.intersect_with_great_circle(1, &circles).unwrap() {
                pending.push(sibling);
            }
        }
        active.append(&mut pending);
        assert_eq!(active.len(), 4);

        let mut leaves = Vec::new();
        for section in &mut active {
            let triangles = section.finalize_polygon(&circles).unwrap();
            assert_eq!(triangles.len(), 4);
            leaves.extend(triangles);
        }
        assert!(leaves.iter().all(|leaf| leaf.polygon().len() == 3));

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..300 {
            let point = UnitVector::random(&mut rng);
            let hits = leaves
                .iter()
                .filter(|leaf| leaf.contains(&point, &circles).unwrap())
                .count();
            assert_eq!(hits, 1, "point {:?} hit {} leaves", point, hits);
        }
    }

    #[test]
    fn test_display_summarizes_section() {
        let (_, section) = octant();
        let text = section.to_string();
        assert!(text.starts_with("height=3 sides=[0+ 1+ 2+]"));
        assert!(text.contains("(0, 2)-"));
    }
}
