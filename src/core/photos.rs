use thiserror::Error;
use crate::models::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("You can only upload up to {0} photos")]
    LimitReached(usize),

    #[error("Photo index {index} out of range ({len} photos)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered photo list for the local user. The first entry is the profile photo.
#[derive(Debug, Clone)]
pub struct ProfilePhotos {
    photos: Vec<String>,
    max: usize,
}

impl ProfilePhotos {
    pub fn new(max: usize) -> Self {
        Self {
            photos: Vec::new(),
            max,
        }
    }

    /// Seed from a profile's current photo
    pub fn from_profile(profile: &Profile, max: usize) -> Self {
        Self {
            photos: profile.photo_url.iter().cloned().collect(),
            max,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn primary(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    pub fn add(&mut self, uri: impl Into<String>) -> Result<(), PhotoError> {
        if self.photos.len() >= self.max {
            return Err(PhotoError::LimitReached(self.max));
        }
        self.photos.push(uri.into());
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<String, PhotoError> {
        self.check(index)?;
        Ok(self.photos.remove(index))
    }

    pub fn move_photo(&mut self, from: usize, to: usize) -> Result<(), PhotoError> {
        self.check(from)?;
        self.check(to)?;
        let photo = self.photos.remove(from);
        self.photos.insert(to, photo);
        Ok(())
    }

    /// Mirror the primary photo into `profile.photo_url`
    pub fn sync(&self, profile: &mut Profile) {
        profile.photo_url = self.primary().map(str::to_string);
    }

    fn check(&self, index: usize) -> Result<(), PhotoError> {
        if index >= self.photos.len() {
            return Err(PhotoError::IndexOutOfRange {
                index,
                len: self.photos.len(),
            });
        }
        Ok(())
    }
}
