// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::fixture::Fixture;

pub fn demo_fixture() -> Fixture {
    Fixture::from_json_str(include_str!("../../../../demos/list.json")).unwrap()
}
