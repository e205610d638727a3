// SPDX-License-Identifier: GPL-3.0-or-later

pub mod args;
pub mod context;
pub mod discovery;
pub mod environment;
pub mod execute;
pub mod rewrite;
