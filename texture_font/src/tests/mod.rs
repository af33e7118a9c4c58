// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_manager;
mod utils;
