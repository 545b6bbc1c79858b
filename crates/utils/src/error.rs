use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::{Display, EnumIter};

pub type BeansResult<T> = Result<T, BeansError>;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum BeansErrorType {
  NotFound,
  CouldntFindPost,
  CouldntFindUser,
  CouldntFindComment,
  CouldntFindBeanProfile,
  CouldntFindGear,
  AlreadyLiked,
  LikeNotFound,
  AlreadyFollowing,
  NotFollowing,
  CantFollowYourself,
  NoPostEditAllowed,
  NoCommentEditAllowed,
  NoBeanProfileEditAllowed,
  NoGearEditAllowed,
  /// A post referenced an image that was never uploaded, or whose upload
  /// did not finish.
  ImageNotUploaded,
  ObjectStoreError(String),
  UserAlreadyExists,
  InvalidDisplayName,
  InvalidBodyField,
  CouldntParsePaginationToken,
  Unknown(String),
}

pub struct BeansError {
  pub error_type: BeansErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for BeansError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => BeansErrorType::NotFound,
      _ => BeansErrorType::Unknown(format!("{}", &cause)),
    };
    BeansError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for BeansError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BeansError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for BeansError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl From<BeansErrorType> for BeansError {
  fn from(error_type: BeansErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    BeansError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait BeansErrorExt<T, E: Into<anyhow::Error>> {
  fn with_beans_type(self, error_type: BeansErrorType) -> BeansResult<T>;
}

impl<T, E: Into<anyhow::Error>> BeansErrorExt<T, E> for Result<T, E> {
  fn with_beans_type(self, error_type: BeansErrorType) -> BeansResult<T> {
    self.map_err(|error| BeansError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait BeansErrorExt2<T> {
  fn with_beans_type(self, error_type: BeansErrorType) -> BeansResult<T>;
}

impl<T> BeansErrorExt2<T> for BeansResult<T> {
  fn with_beans_type(self, error_type: BeansErrorType) -> BeansResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }
}
