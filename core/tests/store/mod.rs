// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

mod clear;
mod create;
mod delete;
mod edit;
mod form;
