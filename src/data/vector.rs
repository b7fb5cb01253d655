use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

impl Vector {
  pub fn x_coord(&self) -> f64 {
    self.0[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.0[1]
  }

  /// Z-component of the cross product of the two vectors.
  pub fn cross(&self, rhs: &Vector) -> f64 {
    self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0]
  }

  pub fn dot(&self, rhs: &Vector) -> f64 {
    self.0[0] * rhs.0[0] + self.0[1] * rhs.0[1]
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.dot(self)
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    Vector(point.array)
  }
}

impl Add for Vector {
  type Output = Vector;
  fn add(self, rhs: Vector) -> Vector {
    Vector([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
  }
}

impl Sub for Vector {
  type Output = Vector;
  fn sub(self, rhs: Vector) -> Vector {
    Vector([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
  }
}

impl Neg for Vector {
  type Output = Vector;
  fn neg(self) -> Vector {
    Vector([-self.0[0], -self.0[1]])
  }
}

impl Mul<f64> for Vector {
  type Output = Vector;
  fn mul(self, scale: f64) -> Vector {
    Vector([self.0[0] * scale, self.0[1] * scale])
  }
}

impl Sub for &Point {
  type Output = Vector;
  fn sub(self, rhs: &Point) -> Vector {
    Vector([
      self.array[0] - rhs.array[0],
      self.array[1] - rhs.array[1],
    ])
  }
}

impl Add<Vector> for Point {
  type Output = Point;
  fn add(self, rhs: Vector) -> Point {
    Point::new([self.array[0] + rhs.0[0], self.array[1] + rhs.0[1]])
  }
}

impl Sub<Vector> for Point {
  type Output = Point;
  fn sub(self, rhs: Vector) -> Point {
    Point::new([self.array[0] - rhs.0[0], self.array[1] - rhs.0[1]])
  }
}
