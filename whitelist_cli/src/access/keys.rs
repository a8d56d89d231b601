// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use whitelist_evm::utils::get_private_key_from_env;

/// The wallet key from the --private-key option, falling back to the env.
pub fn get_private_key(flag: Option<&str>) -> Option<String> {
    match flag {
        Some(key) => {
            debug!("Using the private key given on the command line");
            Some(key.to_string())
        }
        None => get_private_key_from_env(),
    }
}
