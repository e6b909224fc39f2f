use std::{collections::BTreeMap, fmt, io, sync::Arc};

#[derive(Debug, Clone)]
pub struct CardError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<CardCause>,
}

#[derive(Debug, Clone)]
pub enum CardCause {
    Card(Box<CardError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

impl CardError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_card(mut self, cause: CardError) -> Self {
        self.causes.push(CardCause::Card(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(CardCause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")?;
        for cause in &self.causes {
            match cause {
                CardCause::Card(e) => write!(f, ": {e}")?,
                CardCause::Std(e) => write!(f, ": {e}")?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for CardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            CardCause::Card(e) => Some(e.as_ref() as &dyn std::error::Error),
            CardCause::Std(e) => Some(e.as_ref() as &(dyn std::error::Error + 'static)),
        })
    }
}

impl From<io::Error> for CardError {
    fn from(err: io::Error) -> Self {
        CardError::new("io-error").push_std(err)
    }
}

impl From<image::ImageError> for CardError {
    fn from(err: image::ImageError) -> Self {
        CardError::new("image-error").push_std(err)
    }
}

impl From<wgpu::CreateSurfaceError> for CardError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        CardError::new("wgpu::CreateSurfaceError").push_std(err)
    }
}

impl From<wgpu::RequestAdapterError> for CardError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        CardError::new("wgpu::RequestAdapterError").push_std(err)
    }
}

impl From<wgpu::RequestDeviceError> for CardError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        CardError::new("wgpu::RequestDeviceError").push_std(err)
    }
}

impl From<wgpu::SurfaceError> for CardError {
    fn from(err: wgpu::SurfaceError) -> Self {
        CardError::new("wgpu::SurfaceError").push_std(err)
    }
}

impl From<winit::error::EventLoopError> for CardError {
    fn from(err: winit::error::EventLoopError) -> Self {
        CardError::new("winit::error::EventLoopError").with_arg("msg", err)
    }
}

impl From<winit::error::OsError> for CardError {
    fn from(err: winit::error::OsError) -> Self {
        CardError::new("winit::error::OsError").with_arg("msg", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_lists_args_in_key_order() {
        let err = CardError::new("asset-missing")
            .with_arg("path", "assets/ctu-images/tuv.png")
            .with_arg("asset", "IsoBadge");
        assert_eq!(
            err.to_string(),
            "asset-missing(asset=IsoBadge, path=assets/ctu-images/tuv.png)"
        );
    }

    #[test]
    fn io_error_becomes_source() {
        let err: CardError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.key, "io-error");
        assert_eq!(err.source().map(|e| e.to_string()), Some("gone".to_string()));
        assert!(err.to_string().ends_with(": gone"));
    }

    #[test]
    fn nested_card_error_is_reachable() {
        let inner = CardError::new("decode").with_arg("asset", "IdPhoto");
        let outer = CardError::new("load").push_card(inner);
        let source = outer.source().expect("source");
        assert_eq!(source.to_string(), "decode(asset=IdPhoto)");
    }
}
