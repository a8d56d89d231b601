// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::error::Result;
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};

pub(crate) const LOG_FILE_NAME: &str = "whitelist-dapp.log";
const MAX_LOG_FILE_BYTES: usize = 20 * 1024 * 1024;
/// Rotated files kept next to the live one, `whitelist-dapp.log.1` being the newest.
const MAX_ROTATED_LOG_FILES: usize = 5;

/// A background writer appending to `dir/whitelist-dapp.log`. Lines written before the guard
/// is dropped are flushed on drop.
pub(crate) fn rotating_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let file = FileRotate::new(
        dir.join(LOG_FILE_NAME),
        AppendCount::new(MAX_ROTATED_LOG_FILES),
        ContentLimit::BytesSurpassed(MAX_LOG_FILE_BYTES),
        Compression::None,
        #[cfg(unix)]
        None,
    );
    Ok(NonBlockingBuilder::default().lossy(false).finish(file))
}
